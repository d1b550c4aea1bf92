use arbor_core::prelude::*;
use arbor_dom::{build, Document};
use arbor_ssr::{render_node, Renderer};
use pretty_assertions::assert_eq;

#[test]
fn simple() {
    let mut doc = Document::new();
    let el = build(&mut doc, "div", &desc! { "class" => "card", "hello!" => () }).unwrap();
    assert_eq!(render_node(&doc, el), r#"<div class="card">hello!</div>"#);
}

#[test]
fn lists() {
    let mut doc = Document::new();
    let el = build(
        &mut doc,
        "ul",
        &desc! {
            "li" => [
                desc! { "item 0" => () },
                desc! { "item 1" => () },
                desc! { "item 2" => () },
            ],
        },
    )
    .unwrap();

    assert_eq!(
        render_node(&doc, el),
        "<ul><li>item 0</li><li>item 1</li><li>item 2</li></ul>"
    );
}

#[test]
fn svg_declares_its_namespaces() {
    let mut doc = Document::new();
    let el = build(
        &mut doc,
        "svg",
        &desc! {
            "viewBox" => "0 0 100 100",
            "g" => desc! { "use" => desc! { "xlink:href" => "#shape" } },
        },
    )
    .unwrap();

    assert_eq!(
        render_node(&doc, el),
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" viewBox="0 0 100 100">"#,
            r##"<g><use xlink:href="#shape"/></g>"##,
            "</svg>"
        )
    );
}

#[test]
fn static_styles() {
    let mut doc = Document::new();
    let el = build(
        &mut doc,
        "div",
        &desc! { "style" => desc! { "width" => "100px", "height" => 20 } },
    )
    .unwrap();

    assert_eq!(render_node(&doc, el), r#"<div style="width:100px;height:20;"></div>"#);
}

#[test]
fn style_properties_extend_a_literal_style_attribute() {
    let mut doc = Document::new();
    let el = build(&mut doc, "div", &desc! { "style" => "color:red" }).unwrap();
    doc.set_style_property(el, "width", "1px").unwrap();

    assert_eq!(render_node(&doc, el), r#"<div style="color:red;width:1px;"></div>"#);
}

#[test]
fn text_and_attributes_are_escaped() {
    let mut doc = Document::new();
    let el = build(&mut doc, "p", &desc! { "title" => "\"><b>" }).unwrap();
    let text = doc.create_text_node("<script>alert(1)</script>");
    doc.append_child(el, text).unwrap();

    let out = render_node(&doc, el);
    assert!(!out.contains("<script>"), "{out}");
    assert!(!out.contains("\"><b>"), "{out}");
    assert!(out.contains("&lt;script&gt;"), "{out}");

    let out = Renderer {
        sanitize: false,
        ..Default::default()
    }
    .render(&doc, el);
    assert_eq!(out, r#"<p title=""><b>"><script>alert(1)</script></p>"#);
}

#[test]
fn style_element_contents_are_raw() {
    let mut doc = Document::new();
    let el = build(&mut doc, "style", &desc! { "id" => "sheet" }).unwrap();
    let css = doc.create_text_node("a > b { color: red; }");
    doc.append_child(el, css).unwrap();

    assert_eq!(
        render_node(&doc, el),
        r#"<style id="sheet">a > b { color: red; }</style>"#
    );
}

#[test]
fn void_and_empty_elements() {
    let mut doc = Document::new();
    let el = build(
        &mut doc,
        "div",
        &desc! { "br" => desc! {}, "span" => desc! {} },
    )
    .unwrap();
    assert_eq!(render_node(&doc, el), "<div><br/><span></span></div>");

    let svg = build(&mut doc, "svg", &desc! { "line" => desc! {} }).unwrap();
    let out = Renderer {
        self_close_empty: false,
        declare_namespaces: false,
        ..Default::default()
    }
    .render(&doc, svg);
    assert_eq!(out, "<svg><line></line></svg>");
}

#[test]
fn pretty_printing() {
    let mut doc = Document::new();
    let el = build(
        &mut doc,
        "svg",
        &desc! {
            "g" => desc! { "line" => [desc! { "x1" => 1 }, desc! { "x1" => 2 }] },
            "text" => desc! { "?" => () },
        },
    )
    .unwrap();

    let out = Renderer::new().pretty(true).render(&doc, el);
    assert_eq!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg">
    <g>
        <line x1="1"/>
        <line x1="2"/>
    </g>
    <text>?</text>
</svg>"#
    );
}
