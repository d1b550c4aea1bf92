use super::*;
use arbor_icons::IconLibrary;

/// Print the name of every icon in the catalog
#[derive(Clone, Debug, Parser)]
pub(crate) struct List {}

impl List {
    pub(crate) fn list(self) -> anyhow::Result<String> {
        let library = IconLibrary::default();
        Ok(library.names().collect::<Vec<_>>().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_in_catalog_order() {
        let out = List {}.list().unwrap();
        let names: Vec<_> = out.lines().collect();
        assert_eq!(names.len(), 18);
        assert_eq!(names[0], "animation-upload");
        assert_eq!(names[17], "fullscreen");
    }
}
