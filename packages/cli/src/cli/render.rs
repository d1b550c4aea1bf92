use super::*;
use anyhow::{bail, Context};
use arbor_core::Description;
use arbor_dom::Document;
use arbor_icons::IconLibrary;
use arbor_ssr::Renderer;

/// Render an icon as SVG markup
#[derive(Clone, Debug, Parser)]
pub(crate) struct Render {
    /// The icon to render. Unknown names render the invalid icon.
    pub(crate) name: String,

    /// A JSON object merged over the icon, nested objects included.
    #[clap(short, long)]
    pub(crate) overrides: Option<String>,

    /// Indent the markup.
    #[clap(long)]
    pub(crate) pretty: bool,

    /// Also print the keyframe style sheets the icon registered.
    #[clap(long)]
    pub(crate) with_styles: bool,

    /// Fail instead of rendering the invalid icon for unknown names.
    #[clap(long)]
    pub(crate) strict: bool,
}

impl Render {
    pub(crate) fn render(self) -> anyhow::Result<String> {
        let library = IconLibrary::default();
        if self.strict && !library.contains(&self.name) {
            bail!("there is no icon named `{}`", self.name);
        }

        let overrides = self
            .overrides
            .as_deref()
            .map(parse_overrides)
            .transpose()?;

        let mut doc = Document::new();
        let icon = library
            .create_icon(&mut doc, &self.name, overrides.as_ref())
            .with_context(|| format!("failed to build icon `{}`", self.name))?;

        let renderer = Renderer::new().pretty(self.pretty);
        let mut out = String::new();
        if self.with_styles {
            for sheet in doc.children(doc.head()) {
                renderer.render_to(&mut out, &doc, *sheet)?;
                if self.pretty {
                    out.push('\n');
                }
            }
        }
        renderer.render_to(&mut out, &doc, icon)?;

        Ok(out)
    }
}

fn parse_overrides(raw: &str) -> anyhow::Result<Description> {
    let json: serde_json::Value =
        serde_json::from_str(raw).context("overrides are not valid JSON")?;
    Ok(Description::try_from(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(name: &str) -> Render {
        Render {
            name: name.to_string(),
            overrides: None,
            pretty: false,
            with_styles: false,
            strict: false,
        }
    }

    #[test]
    fn renders_svg() {
        let out = render("close").render().unwrap();
        assert!(out.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg""#), "{out}");
        assert_eq!(out.matches("<line ").count(), 2);
    }

    #[test]
    fn applies_overrides() {
        let out = Render {
            overrides: Some(r#"{"stroke": "red", "path": {"fill": "pink"}}"#.to_string()),
            ..render("heart")
        }
        .render()
        .unwrap();

        assert!(out.contains(r#"stroke="red""#), "{out}");
        assert!(out.contains(r#"<path d="#), "{out}");
        assert!(out.contains(r#"fill="pink""#), "{out}");
    }

    #[test]
    fn rejects_bad_overrides() {
        for raw in ["{", "[1, 2]", "\"red\""] {
            let cmd = Render {
                overrides: Some(raw.to_string()),
                ..render("heart")
            };
            assert!(cmd.render().is_err(), "{raw}");
        }
    }

    #[test]
    fn styles_come_first() {
        let out = Render {
            with_styles: true,
            ..render("animation-upload")
        }
        .render()
        .unwrap();
        assert!(
            out.starts_with(r#"<style id="IconLibrary-animation-animation-upload">@keyframes upload"#),
            "{out}"
        );

        let out = Render {
            with_styles: true,
            ..render("heart")
        }
        .render()
        .unwrap();
        assert!(out.starts_with("<svg"), "{out}");
    }

    #[test]
    fn unknown_names() {
        let out = render("nope").render().unwrap();
        assert!(out.contains(">?</text>"), "{out}");

        let strict = Render {
            strict: true,
            ..render("nope")
        };
        assert!(strict.render().is_err());
    }
}
