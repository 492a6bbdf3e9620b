use page_enhancer::Harness;
use proptest::collection::vec;
use proptest::prelude::*;

const DEFAULT_FUZZ_CASES: u32 = 128;

fn env_proptest_cases(var_name: &str, default_cases: u32) -> u32 {
    std::env::var(var_name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default_cases)
}

fn field_value_strategy() -> BoxedStrategy<String> {
    prop_oneof![
        Just(String::new()),
        Just(" ".to_string()),
        Just("   ".to_string()),
        Just("\t \t".to_string()),
        Just("x".to_string()),
        Just(" a ".to_string()),
        Just("user@example.com".to_string()),
        Just("hunter2".to_string()),
        Just("日本語".to_string()),
    ]
    .boxed()
}

fn html_fragment_strategy() -> BoxedStrategy<String> {
    prop_oneof![
        Just("<div>".to_string()),
        Just("</div>".to_string()),
        Just("<span class='flash'>hi</span>".to_string()),
        Just("<input id='a' required>".to_string()),
        Just("plain text ".to_string()),
        Just("<!-- note -->".to_string()),
        Just("<br/>".to_string()),
        Just("<form data-validate>".to_string()),
        Just("</form>".to_string()),
        Just("<button data-toggle-password='a'>Show</button>".to_string()),
        Just("<script>if (1 < 2) { go(); }</script>".to_string()),
        Just("<".to_string()),
        Just("<div".to_string()),
        Just("<!--".to_string()),
        Just("'".to_string()),
    ]
    .boxed()
}

fn selector_fragment_strategy() -> BoxedStrategy<String> {
    prop_oneof![
        Just(".flash".to_string()),
        Just("#a".to_string()),
        Just("div".to_string()),
        Just("*".to_string()),
        Just("[required]".to_string()),
        Just("form[data-validate]".to_string()),
        Just(">".to_string()),
        Just(" ".to_string()),
        Just(",".to_string()),
        Just("??".to_string()),
        Just("[".to_string()),
        Just("]".to_string()),
    ]
    .boxed()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: env_proptest_cases("PAGE_ENHANCER_FUZZ_CASES", DEFAULT_FUZZ_CASES),
        .. ProptestConfig::default()
    })]

    #[test]
    fn validation_verdict_equals_the_nonblank_predicate(
        values in vec(field_value_strategy(), 1..5)
    ) {
        let mut html = String::from("<form id='target' data-validate action='/save'>");
        for (idx, value) in values.iter().enumerate() {
            html.push_str(&format!("<input id='field-{idx}' required value='{value}'>"));
        }
        html.push_str("</form>");

        let mut h = Harness::from_html(&html).unwrap();
        h.submit("#target").unwrap();

        let all_filled = values.iter().all(|value| !value.trim().is_empty());
        let submissions = h.take_form_submissions();
        let alerts = h.take_alert_messages();

        prop_assert_eq!(submissions.len(), usize::from(all_filled));
        prop_assert_eq!(alerts.len(), usize::from(!all_filled));

        for (idx, value) in values.iter().enumerate() {
            let selector = format!("#field-{idx}");
            let expect_error = value.trim().is_empty();
            prop_assert!(h.assert_has_class(&selector, "input-error", expect_error).is_ok());
        }
    }

    #[test]
    fn toggle_state_depends_only_on_click_parity(clicks in 0usize..8) {
        let html = r#"
            <input id='password' type='password'>
            <button id='reveal' type='button' data-toggle-password='password'>Show</button>
            "#;

        let mut h = Harness::from_html(html).unwrap();
        for _ in 0..clicks {
            h.click("#reveal").unwrap();
        }

        let revealed = clicks % 2 == 1;
        let expected_type = if revealed { "text" } else { "password" };
        prop_assert!(h.assert_attr("#password", "type", expected_type).is_ok());
        if clicks > 0 {
            let expected_label = if revealed { "Hide" } else { "Show" };
            prop_assert!(h.assert_text("#reveal", expected_label).is_ok());
        }
    }

    #[test]
    fn parser_accepts_or_rejects_generated_markup_without_panicking(
        fragments in vec(html_fragment_strategy(), 0..12)
    ) {
        let html = fragments.concat();
        let _ = Harness::from_html(&html);
    }

    #[test]
    fn selector_engine_never_panics_on_generated_input(
        fragments in vec(selector_fragment_strategy(), 1..8)
    ) {
        let h = Harness::from_html("<div id='a' class='flash'></div>").unwrap();
        let selector = fragments.concat();
        let _ = h.count(&selector);
    }
}
