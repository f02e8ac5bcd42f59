//! Tests for filters, sorts and request bodies

#[cfg(test)]
mod tests {
    use crate::models::{Block, ObjectKind, PaginationRequest, Parent, Property, RichText};
    use crate::query::conditions::{self, checkbox, date, formula, multi_select, number, text};
    use crate::query::{
        AppendChildrenRequest, CompoundFilter, CreatePageRequest, Direction, Filter,
        FilterOperation, PropertyFilter, QueryDatabaseRequest, SearchRequest, Sort, Timestamp,
        UpdatePageRequest,
    };
    use serde_json::json;

    fn leaf(name: &str) -> Filter {
        PropertyFilter::new(name, checkbox::equals(true)).into()
    }

    // ========================================================================
    // Conditions
    // ========================================================================

    #[test]
    fn test_property_filter_shape() {
        let filter = PropertyFilter::new("Name", text::contains("launch"));
        assert_eq!(
            filter.json().to_value(),
            json!({"property": "Name", "text": {"contains": "launch"}})
        );
        assert_eq!(filter.property(), "Name");
        assert_eq!(filter.condition().operator(), "contains");
    }

    #[test]
    fn test_emptiness_checks_send_true() {
        let condition = number::is_empty();
        assert_eq!(condition.body().to_value(), json!({"is_empty": true}));
        assert_eq!(
            conditions::files::is_not_empty().body().to_value(),
            json!({"is_not_empty": true})
        );
    }

    #[test]
    fn test_relative_dates_send_empty_object() {
        let filter = PropertyFilter::new("Due", date::past_week());
        assert_eq!(
            filter.json().to_value(),
            json!({"property": "Due", "date": {"past_week": {}}})
        );
        assert_eq!(date::next_year().body().to_value(), json!({"next_year": {}}));
    }

    #[test]
    fn test_number_operators() {
        let condition = number::greater_than_or_equal_to(10);
        assert_eq!(condition.category(), "number");
        assert_eq!(
            condition.body().to_value(),
            json!({"greater_than_or_equal_to": 10})
        );
    }

    #[test]
    fn test_multi_select_does_not_contain_spelling() {
        let condition = multi_select::does_not_contain("archived");
        assert_eq!(condition.operator(), "does_not_contain");
        assert_eq!(condition.category(), "multi_select");
    }

    #[test]
    fn test_formula_wraps_result_condition() {
        let filter = PropertyFilter::new("Score", formula::number(number::less_than(5)));
        assert_eq!(
            filter.json().to_value(),
            json!({"property": "Score", "formula": {"number": {"less_than": 5}}})
        );

        let flag = formula::checkbox(checkbox::does_not_equal(false));
        assert_eq!(flag.operator(), "checkbox");
    }

    // ========================================================================
    // Compound Filters
    // ========================================================================

    #[test]
    fn test_same_operation_is_flattened() {
        let inner = CompoundFilter::new(FilterOperation::And, vec![leaf("B"), leaf("C")]);
        let outer = CompoundFilter::new(FilterOperation::And, vec![leaf("A"), inner.into()]);

        let filters = outer.filters();
        let names: Vec<String> = filters.iter().map(|f| f.get_string("property")).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(outer.json().len(), 1);
        assert!(outer.json().contains_key("and"));
    }

    #[test]
    fn test_other_operation_keeps_grouping() {
        let inner = CompoundFilter::new(FilterOperation::Or, vec![leaf("B"), leaf("C")]);
        let outer = CompoundFilter::new(FilterOperation::And, vec![leaf("A"), inner.into()]);

        let filters = outer.filters();
        assert_eq!(filters.len(), 2);
        assert_eq!(filters[1].get_doc_list("or").unwrap().len(), 2);
        assert_eq!(
            outer.json().to_value(),
            json!({"and": [
                {"property": "A", "checkbox": {"equals": true}},
                {"or": [
                    {"property": "B", "checkbox": {"equals": true}},
                    {"property": "C", "checkbox": {"equals": true}}
                ]}
            ]})
        );
    }

    #[test]
    fn test_flattening_is_one_level_per_construction() {
        let deep = CompoundFilter::new(FilterOperation::Or, vec![leaf("X")]);
        let mid = CompoundFilter::new(FilterOperation::And, vec![leaf("B"), deep.into()]);
        let top = CompoundFilter::new(FilterOperation::And, vec![mid.into(), leaf("A")]);

        let filters = top.filters();
        assert_eq!(filters.len(), 3);
        assert_eq!(filters[0].get_string("property"), "B");
        assert!(filters[1].get_doc_list("or").is_some());
        assert_eq!(filters[2].get_string("property"), "A");
    }

    #[test]
    fn test_from_tag() {
        let filter = CompoundFilter::from_tag("or", vec![leaf("A")]).unwrap();
        assert_eq!(filter.operation(), FilterOperation::Or);
        assert!(CompoundFilter::from_tag("xor", vec![leaf("A")]).is_none());
        assert!(CompoundFilter::from_tag("AND", vec![]).is_none());
    }

    #[test]
    fn test_empty_compound() {
        let filter = CompoundFilter::new(FilterOperation::And, vec![]);
        assert_eq!(filter.json().to_value(), json!({"and": []}));
        assert!(filter.filters().is_empty());
    }

    // ========================================================================
    // Request Bodies
    // ========================================================================

    #[test]
    fn test_sort_shapes() {
        assert_eq!(
            Sort::by_property("Name", Direction::Descending).json().to_value(),
            json!({"property": "Name", "direction": "descending"})
        );
        assert_eq!(
            Sort::by_timestamp(Timestamp::LastEditedTime, Direction::default())
                .json()
                .to_value(),
            json!({"timestamp": "last_edited_time", "direction": "ascending"})
        );
    }

    #[test]
    fn test_query_database_body() {
        let request = QueryDatabaseRequest::new()
            .with_pagination(PaginationRequest::new().with_page_size(50))
            .with_filter(PropertyFilter::new("Done", checkbox::equals(false)))
            .with_sort(Sort::by_property("Name", Direction::Ascending));

        assert_eq!(
            request.json().to_value(),
            json!({
                "page_size": 50,
                "filter": {"property": "Done", "checkbox": {"equals": false}},
                "sorts": [{"property": "Name", "direction": "ascending"}]
            })
        );
        assert!(QueryDatabaseRequest::new().json().is_empty());
    }

    #[test]
    fn test_search_body() {
        let request = SearchRequest::new("roadmap")
            .with_object(ObjectKind::Page)
            .with_sort(Sort::by_timestamp(Timestamp::LastEditedTime, Direction::Descending));

        assert_eq!(
            request.json().to_value(),
            json!({
                "query": "roadmap",
                "filter": {"property": "object", "value": "page"},
                "sort": {"direction": "descending", "timestamp": "last_edited_time"}
            })
        );
        assert!(SearchRequest::new("  ").json().is_empty());
    }

    #[test]
    fn test_create_page_body() {
        let request = CreatePageRequest::new(Parent::Database("d-1".into()))
            .with_property(Property::title("Name", vec![RichText::new("New")]))
            .with_property(Property::checkbox("Done", false));

        let body = request.json().to_value();
        assert_eq!(body["parent"]["database_id"], "d-1");
        assert_eq!(body["properties"]["Done"]["checkbox"], false);
        assert_eq!(body["properties"]["Name"]["title"][0]["plain_text"], "New");
        assert!(body.get("children").is_none());

        let with_child = request
            .with_child(Block::paragraph(vec![RichText::new("body")]))
            .json()
            .to_value();
        assert_eq!(with_child["children"][0]["type"], "paragraph");
    }

    #[test]
    fn test_update_and_append_bodies() {
        let update = UpdatePageRequest::new(vec![Property::number("Estimate", 2.0)])
            .with_archived(true)
            .json()
            .to_value();
        assert_eq!(update["archived"], true);
        assert_eq!(update["properties"]["Estimate"]["number"], 2.0);

        let append = AppendChildrenRequest::new(vec![
            Block::heading_1(vec![RichText::new("One")]),
            Block::child_page("Two"),
        ])
        .json()
        .to_value();
        assert_eq!(append["children"][0]["type"], "heading_1");
        assert_eq!(append["children"][1]["child_page"]["title"], "Two");
    }
}
