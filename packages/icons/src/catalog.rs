//! The built-in icons.
//!
//! Every icon is drawn on a 100 by 100 canvas and relies on the stroke settings from
//! [`defaults`] for its look.

use arbor_core::{desc, Description, Value};

/// The properties every icon starts from.
pub fn defaults() -> Description {
    desc! {
        "version" => "1.1",
        "viewBox" => "0 0 100 100",
        "preserveAspectRatio" => "none",
        "stroke-width" => "5px",
        "stroke-linecap" => "round",
        "stroke" => "black",
    }
}

/// The glyph shown in place of an icon that doesn't exist: a red question mark.
pub fn invalid_icon() -> Description {
    desc! {
        "fill" => "#f00",
        "stroke-width" => "0",
        "text" => desc! {
            "x" => 50,
            "y" => 50,
            "width" => 100,
            "height" => 100,
            "font-size" => 80,
            "text-anchor" => "middle",
            "alignment-baseline" => "central",
            "?" => (),
        },
    }
}

/// Keyframe style sheets for the animated icons, keyed by icon name.
pub fn animations() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "animation-upload",
            "@keyframes upload { from { transform: translateY(80%); } to { transform: translateY(0); } }",
        ),
        (
            "animation-restart",
            "@keyframes rotate { from { transform: rotate(0); } to { transform: rotate(360deg); } }",
        ),
    ]
}

fn line(x1: i64, y1: i64, x2: i64, y2: i64) -> Description {
    desc! { "x1" => x1, "y1" => y1, "x2" => x2, "y2" => y2 }
}

fn lines<const N: usize>(coords: [(i64, i64, i64, i64); N]) -> Value {
    coords
        .into_iter()
        .map(|(x1, y1, x2, y2)| Value::from(line(x1, y1, x2, y2)))
        .collect::<Vec<_>>()
        .into()
}

fn circle(fill: &str, cx: i64, cy: i64, r: i64) -> Description {
    desc! { "fill" => fill, "cx" => cx, "cy" => cy, "r" => r }
}

fn restart_arrows() -> Description {
    desc! {
        "path" => [
            desc! { "fill" => "none", "d" => "M 40 20 C 10 30 10 70, 40 80" },
            desc! { "fill" => "none", "d" => "M 60 20 C 90 30 90 70, 60 80" },
        ],
        "line" => lines([
            (40, 20, 30, 15),
            (40, 20, 36, 32),
            (60, 80, 64, 68),
            (60, 80, 70, 85),
        ]),
    }
}

fn smiley(mouth: &str) -> Description {
    desc! {
        "circle" => [
            circle("none", 50, 50, 30),
            circle("#000", 40, 38, 2),
            circle("#000", 60, 38, 2),
        ],
        "line" => line(50, 42, 50, 52),
        "path" => desc! { "fill" => "none", "d" => mouth },
    }
}

/// The built-in icons, in catalog order.
pub fn icons() -> Vec<(&'static str, Description)> {
    vec![
        (
            "animation-upload",
            desc! {
                "g" => [
                    desc! { "line" => line(20, 20, 80, 20) },
                    desc! {
                        "line" => lines([(50, 30, 50, 80), (30, 50, 50, 30), (70, 50, 50, 30)]),
                        "style" => desc! { "animation" => "upload 800ms 0s ease infinite" },
                    },
                ],
            },
        ),
        (
            "animation-restart",
            restart_arrows().with(
                "style",
                desc! { "animation" => "rotate 4s 0s linear infinite" },
            ),
        ),
        (
            "heart",
            desc! {
                "path" => desc! {
                    "d" => "M 50 75 C 0 33, 41 18, 50 35C 59 18, 100 33, 50 75",
                },
            },
        ),
        (
            "noEntry",
            desc! {
                "circle" => desc! { "cx" => 50, "cy" => 53, "r" => 25 },
                "line" => desc! {
                    "stroke-linecap" => "butt",
                    "stroke-width" => 10,
                    "x1" => 32,
                    "y1" => 53,
                    "x2" => 68,
                    "y2" => 53,
                },
            },
        ),
        ("smileyHappy", smiley("M 33 60 Q 50 75, 67 60")),
        ("smileySad", smiley("M 33 65 Q 50 55, 67 65")),
        (
            "stop",
            desc! { "path" => desc! { "d" => "M 30 30 L 70 30 L 70 70 L 30 70 L 30 30" } },
        ),
        (
            "play",
            desc! {
                "fill" => "none",
                "path" => desc! { "d" => "M 30 30 L 70 50 L 30 70 L 30 30" },
            },
        ),
        (
            "pause",
            desc! {
                "stroke-linecap" => "butt",
                "stroke-width" => 10,
                "line" => lines([(38, 30, 38, 70), (62, 30, 62, 70)]),
            },
        ),
        ("restart", restart_arrows()),
        (
            "download",
            desc! {
                "line" => lines([
                    (20, 80, 80, 80),
                    (50, 20, 50, 70),
                    (30, 50, 50, 70),
                    (70, 50, 50, 70),
                ]),
            },
        ),
        ("next", desc! { "line" => lines([(35, 20, 65, 50), (35, 80, 65, 50)]) }),
        ("prev", desc! { "line" => lines([(65, 20, 35, 50), (65, 80, 35, 50)]) }),
        ("info", desc! { "line" => lines([(50, 45, 50, 70), (50, 30, 50, 30)]) }),
        ("close", desc! { "line" => lines([(30, 30, 70, 70), (30, 70, 70, 30)]) }),
        (
            "menu",
            desc! { "line" => lines([(20, 30, 80, 30), (20, 50, 80, 50), (20, 70, 80, 70)]) },
        ),
        (
            "menu2",
            desc! {
                "line" => lines([
                    (20, 30, 20, 30),
                    (35, 30, 80, 30),
                    (20, 50, 20, 50),
                    (35, 50, 80, 50),
                    (20, 70, 20, 70),
                    (35, 70, 80, 70),
                ]),
            },
        ),
        (
            "fullscreen",
            desc! {
                "line" => lines([
                    (18, 10, 30, 10),
                    (10, 18, 10, 30),
                    (20, 20, 35, 35),
                    (70, 10, 82, 10),
                    (90, 18, 90, 30),
                    (80, 20, 65, 35),
                    (70, 90, 82, 90),
                    (90, 82, 90, 70),
                    (80, 80, 65, 65),
                    (18, 90, 30, 90),
                    (10, 82, 10, 70),
                    (20, 80, 35, 65),
                ]),
            },
        ),
    ]
}
