use super::*;
use crate::catalog::themes::ThemeRegistry;
use crate::compose::compositor::compose_avatar;
use crate::persona::model::{AccessoryConfig, PersonaConfig};
use serde_json::json;

fn sample() -> ComposedAvatar {
    let config = PersonaConfig::default()
        .with_accessory(AccessoryConfig::new(AccessoryType::Glasses, Rgb8::BLACK))
        .with_accessory(AccessoryConfig::new(AccessoryType::Scarf, Rgb8::WHITE));
    compose_avatar(&config, ThemeRegistry::builtin(), 96.0)
}

#[test]
fn primitives_flatten_every_layer_bottom_to_top() {
    let a = sample();
    let total: usize = a.layers.iter().map(|l| l.iter_primitives().count()).sum();
    assert_eq!(a.primitives().count(), total);
    // background first, ambient shadow last
    let first = a.primitives().next().unwrap();
    assert_eq!(first.bounding_box().width(), 200.0);
    let last = a.primitives().last().unwrap();
    assert!(last.effective_opacity() < 0.2);
}

#[test]
fn accessory_layer_flattens_sublayers_in_order() {
    let a = sample();
    let layer = a.layer(LayerKind::Accessories).unwrap();
    let subs = a.accessory_layers();
    assert_eq!(subs.len(), 2);
    let expected: Vec<&Primitive> = subs.iter().flat_map(|s| s.primitives.iter()).collect();
    assert_eq!(layer.iter_primitives().collect::<Vec<_>>(), expected);
}

#[test]
fn serializes_layers_with_kind_and_content_tags() {
    let a = sample();
    let v: serde_json::Value = serde_json::from_str(&a.to_json_pretty().unwrap()).unwrap();
    assert_eq!(v["layers"].as_array().unwrap().len(), 7);
    assert_eq!(v["layers"][0]["kind"], json!("background"));
    assert_eq!(v["layers"][0]["content"], json!("primitives"));
    assert_eq!(v["layers"][5]["kind"], json!("accessories"));
    assert_eq!(v["layers"][5]["sublayers"][1]["kind"], json!("scarf"));
    assert_eq!(v["theme"], json!("urban-dawn"));
    assert_eq!(v["gradient_stops"][0], json!("#FFE5B4"));
    assert_eq!(v["size"], json!(96.0));
}

#[test]
fn order_lists_each_kind_once() {
    for (i, k) in LayerKind::ORDER.iter().enumerate() {
        assert!(!LayerKind::ORDER[i + 1..].contains(k));
    }
}
