//! Tests for database column configurations

#[cfg(test)]
mod tests {
    use crate::models::{
        Catalog, Color, Configuration, ConfigurationType, Doc, SelectOption,
    };
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Doc {
        Doc::from_value(value).unwrap()
    }

    #[test]
    fn test_every_kind_round_trips_through_assign() {
        for kind in ConfigurationType::ALL {
            let configuration = match kind {
                ConfigurationType::Number => Configuration::number("Col", "dollar"),
                ConfigurationType::Select => {
                    Configuration::select("Col", &[SelectOption::new("a", Color::Red)]).unwrap()
                }
                ConfigurationType::MultiSelect => {
                    Configuration::multi_select("Col", &[SelectOption::new("b", Color::Blue)])
                        .unwrap()
                }
                ConfigurationType::Formula => Configuration::formula("Col", "prop(\"N\") * 2"),
                other => Configuration::simple("Col", *other),
            };

            assert_eq!(configuration.configuration_type(), *kind);
            let decoded = Configuration::assign("Col", configuration.json().clone()).unwrap();
            assert_eq!(decoded, configuration, "round trip of {}", kind);
        }
    }

    #[test]
    fn test_simple_kinds_carry_empty_payload() {
        let checkbox = Configuration::simple("Done", ConfigurationType::Checkbox);
        assert_eq!(
            checkbox.json().to_value(),
            json!({"type": "checkbox", "checkbox": {}})
        );
        assert_eq!(checkbox.name(), "Done");
    }

    #[test]
    fn test_number_format() {
        let configuration = Configuration::assign(
            "Price",
            doc(json!({"id": "x1", "type": "number", "number": {"format": "dollar"}})),
        )
        .unwrap();
        let Configuration::Number(number) = &configuration else {
            panic!("expected number");
        };
        assert_eq!(number.format(), "dollar");
        assert_eq!(configuration.id(), "x1");
    }

    #[test]
    fn test_select_options_skip_malformed() {
        let configuration = Configuration::assign(
            "Status",
            doc(json!({"type": "select", "select": {"options": [
                {"id": "1", "name": "Todo", "color": "red"},
                {"id": "2"},
                {"id": "3", "name": "Done", "color": "green"}
            ]}})),
        )
        .unwrap();
        let Configuration::Select(select) = configuration else {
            panic!("expected select");
        };
        let options = select.options();
        assert_eq!(options.len(), 2);
        assert_eq!(options[1].name, "Done");
        assert_eq!(options[1].color, Color::Green);
    }

    #[test]
    fn test_select_option_with_new_colour_is_kept() {
        let configuration = Configuration::assign(
            "Status",
            doc(json!({"type": "select", "select": {"options": [
                {"id": "1", "name": "Later", "color": "teal"},
                {"id": "2", "name": "Now", "color": "red"}
            ]}})),
        )
        .unwrap();
        let Configuration::Select(select) = configuration else {
            panic!("expected select");
        };
        let options = select.options();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].name, "Later");
        assert_eq!(options[0].color, Color::Default);
        assert_eq!(options[1].color, Color::Red);
    }

    #[test]
    fn test_formula_expression() {
        let Configuration::Formula(formula) = Configuration::formula("Total", "1 + 1") else {
            panic!("expected formula");
        };
        assert_eq!(formula.expression(), "1 + 1");
    }

    #[test]
    fn test_missing_payload_reads_as_empty() {
        let Configuration::Number(number) =
            Configuration::assign("N", doc(json!({"type": "number"}))).unwrap()
        else {
            panic!("expected number");
        };
        assert_eq!(number.format(), "");
    }

    #[test]
    fn test_unknown_configuration_type() {
        let err = Configuration::assign("R", doc(json!({"type": "rollup", "rollup": {}})))
            .unwrap_err();
        assert!(err.is_unknown_variant());
    }
}
