use autocomplete::{Config, DEFAULT_BASE_CLASS, Search, WidgetOptions};

#[test]
fn options_from_toml() {
    let options: WidgetOptions = toml::from_str(
        r#"
        base_class = "city"
        auto_select = true
        "#,
    )
    .unwrap();
    assert_eq!(
        options,
        WidgetOptions {
            base_class: "city".to_string(),
            auto_select: true,
        }
    );
}

#[test]
fn missing_fields_take_defaults() {
    let options: WidgetOptions = toml::from_str("auto_select = true").unwrap();
    assert_eq!(options.base_class, DEFAULT_BASE_CLASS);
    assert!(options.auto_select);

    let options: WidgetOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, WidgetOptions::default());
}

#[test]
fn options_json_round_trip() {
    let options = WidgetOptions {
        base_class: "ac".to_string(),
        auto_select: false,
    };
    let json = serde_json::to_string(&options).unwrap();
    assert_eq!(json, r#"{"base_class":"ac","auto_select":false}"#);
    assert_eq!(serde_json::from_str::<WidgetOptions>(&json).unwrap(), options);
}

#[test]
fn loaded_options_replace_builder_values() {
    let options: WidgetOptions = serde_json::from_str(r#"{"base_class":"city"}"#).unwrap();
    let config = Config::<String>::new(|_| Search::Ready(Vec::new()))
        .auto_select(true)
        .options(options);
    assert_eq!(config.widget_options().base_class, "city");
    assert!(!config.widget_options().auto_select);
}
