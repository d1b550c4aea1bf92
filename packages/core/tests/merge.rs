//! Layering descriptions on top of each other.

use arbor_core::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn nothing_to_merge() {
    let none: [Option<&Description>; 0] = [];
    assert!(merge_shallow(none).is_empty());
    assert!(merge_deep([None::<&Description>, None]).is_empty());
}

#[test]
fn later_wins_in_shallow_mode() {
    let merged = merge_shallow([&desc! { "a" => 1 }, &desc! { "a" => 2 }]);
    assert_eq!(merged, desc! { "a" => 2 });
}

#[test]
fn shallow_mode_replaces_nested_maps() {
    let merged = merge_shallow([
        &desc! { "a" => desc! { "x" => 1 } },
        &desc! { "a" => desc! { "y" => 2 } },
    ]);
    assert_eq!(merged, desc! { "a" => desc! { "y" => 2 } });
}

#[test]
fn deep_mode_merges_nested_maps() {
    let merged = merge_deep([
        &desc! { "a" => desc! { "x" => 1 } },
        &desc! { "a" => desc! { "y" => 2 } },
    ]);
    assert_eq!(merged, desc! { "a" => desc! { "x" => 1, "y" => 2 } });
}

#[test]
fn deep_mode_recurses_through_several_levels() {
    let merged = merge_deep([
        &desc! { "g" => desc! { "text" => desc! { "x" => 50, "y" => 50 }, "fill" => "red" } },
        &desc! { "g" => desc! { "text" => desc! { "y" => 10 } } },
        &desc! { "g" => desc! { "fill" => "blue" } },
    ]);
    assert_eq!(
        merged,
        desc! { "g" => desc! { "text" => desc! { "x" => 50, "y" => 10 }, "fill" => "blue" } }
    );
}

#[test]
fn arrays_replace_maps_in_deep_mode() {
    let merged = merge_deep([
        &desc! { "a" => desc! { "x" => 1 } },
        &desc! { "a" => [1, 2] },
    ]);
    assert_eq!(merged, desc! { "a" => [1, 2] });
}

#[test]
fn arrays_are_not_merged_positionally() {
    let merged = merge_deep([
        &desc! { "line" => [desc! { "x1" => 1 }, desc! { "x1" => 2 }] },
        &desc! { "line" => [desc! { "y1" => 3 }] },
    ]);
    assert_eq!(merged, desc! { "line" => [desc! { "y1" => 3 }] });
}

#[test]
fn maps_replace_scalars_in_deep_mode() {
    let merged = merge_deep([&desc! { "a" => "flat" }, &desc! { "a" => desc! { "x" => 1 } }]);
    assert_eq!(merged, desc! { "a" => desc! { "x" => 1 } });

    let merged = merge_deep([&desc! { "a" => desc! { "x" => 1 } }, &desc! { "a" => () }]);
    assert_eq!(merged, desc! { "a" => () });
}

#[test]
fn key_order_follows_first_insertion() {
    let merged = merge_shallow([&desc! { "b" => 1, "a" => 1 }, &desc! { "a" => 2, "c" => 3 }]);
    assert_eq!(merged.keys().collect::<Vec<_>>(), ["b", "a", "c"]);

    let merged = merge_deep([
        &desc! { "g" => desc! { "y" => 1, "x" => 1 } },
        &desc! { "g" => desc! { "z" => 1, "x" => 2 } },
    ]);
    let g = merged.get("g").and_then(Value::as_map).unwrap();
    assert_eq!(g.keys().collect::<Vec<_>>(), ["y", "x", "z"]);
}

#[test]
fn merged_descriptions_compare_in_order() {
    let merged = merge_deep([
        &desc! { "g" => desc! { "y" => 1, "x" => 1 } },
        &desc! { "g" => desc! { "x" => 2 } },
    ]);
    assert_eq!(merged, desc! { "g" => desc! { "y" => 1, "x" => 2 } });
    assert_ne!(merged, desc! { "g" => desc! { "x" => 2, "y" => 1 } });
}

#[test]
fn missing_layers_are_skipped() {
    let base = desc! { "stroke" => "black" };
    let merged = merge_deep([None, Some(&base), None]);
    assert_eq!(merged, base);
}

#[test]
fn inputs_are_left_untouched() {
    let first = desc! { "a" => desc! { "x" => 1 } };
    let second = desc! { "a" => desc! { "y" => 2 }, "b" => 3 };

    let mut merged = merge_deep([&first, &second]);
    if let Some(Value::Map(a)) = merged.get_mut("a") {
        a.insert("z", 3);
    }

    assert_eq!(first, desc! { "a" => desc! { "x" => 1 } });
    assert_eq!(second, desc! { "a" => desc! { "y" => 2 }, "b" => 3 });
}

#[test]
fn listeners_and_elements_are_shared_not_copied() {
    let handler = EventHandler::new(|_| {});
    let merged = merge_deep([
        &desc! { "click" => handler.clone() },
        &desc! { "child" => ElementId(7) },
    ]);
    assert_eq!(merged.get("click"), Some(&Value::Listener(handler)));
    assert_eq!(merged.get("child"), Some(&Value::Element(ElementId(7))));
}

#[test]
fn merged_with_uses_the_given_mode() {
    let base = desc! { "a" => desc! { "x" => 1 } };
    let other = desc! { "a" => desc! { "y" => 2 } };
    assert_eq!(
        base.merged_with(&other, MergeOptions::deep()),
        desc! { "a" => desc! { "x" => 1, "y" => 2 } }
    );
    assert_eq!(
        base.merged_with(&other, MergeOptions::default()),
        desc! { "a" => desc! { "y" => 2 } }
    );
}
