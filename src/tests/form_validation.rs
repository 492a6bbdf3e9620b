use super::*;

#[test]
fn valid_submission_proceeds_and_is_recorded() -> Result<()> {
    let html = r#"
        <form id='login' data-validate action='/login' method='post'>
          <input id='email' name='email' required value='user@example.com'>
          <input id='password' name='password' type='password' required value='hunter2'>
        </form>
        "#;

    let mut h = Harness::from_html(html)?;
    h.submit("#login")?;
    assert_eq!(
        h.take_form_submissions(),
        vec![FormSubmission {
            form: "form#login".to_string(),
            action: "/login".to_string(),
            method: "post".to_string(),
        }]
    );
    h.assert_has_class("#email", "input-error", false)?;
    h.assert_has_class("#password", "input-error", false)?;
    assert!(h.take_alert_messages().is_empty());
    Ok(())
}

#[test]
fn empty_required_field_blocks_the_submission() -> Result<()> {
    let html = r#"
        <form id='login' data-validate>
          <input id='email' required>
          <input id='password' type='password' required value='hunter2'>
        </form>
        "#;

    let mut h = Harness::from_html(html)?;
    h.submit("#login")?;
    assert!(h.take_form_submissions().is_empty());
    h.assert_has_class("#email", "input-error", true)?;
    h.assert_has_class("#password", "input-error", false)?;
    assert_eq!(
        h.take_alert_messages(),
        vec!["Please fill in all required fields.".to_string()]
    );
    Ok(())
}

#[test]
fn whitespace_only_value_counts_as_empty() -> Result<()> {
    let html = r#"
        <form id='login' data-validate>
          <input id='email' required>
        </form>
        "#;

    let mut h = Harness::from_html(html)?;
    h.type_text("#email", "   ")?;
    h.submit("#login")?;
    assert!(h.take_form_submissions().is_empty());
    h.assert_has_class("#email", "input-error", true)?;
    Ok(())
}

#[test]
fn error_class_is_cleared_from_filled_fields_even_when_still_invalid() -> Result<()> {
    let html = r#"
        <form id='login' data-validate>
          <input id='email' required>
          <input id='password' type='password' required>
        </form>
        "#;

    let mut h = Harness::from_html(html)?;
    h.submit("#login")?;
    h.assert_has_class("#email", "input-error", true)?;
    h.assert_has_class("#password", "input-error", true)?;
    assert_eq!(h.take_alert_messages().len(), 1);

    h.type_text("#email", "user@example.com")?;
    h.submit("#login")?;
    h.assert_has_class("#email", "input-error", false)?;
    h.assert_has_class("#password", "input-error", true)?;
    assert_eq!(h.take_alert_messages().len(), 1);
    assert!(h.take_form_submissions().is_empty());
    Ok(())
}

#[test]
fn corrected_resubmission_clears_errors_and_goes_through() -> Result<()> {
    let html = r#"
        <form id='login' data-validate>
          <input id='email' required>
        </form>
        "#;

    let mut h = Harness::from_html(html)?;
    h.submit("#login")?;
    h.assert_has_class("#email", "input-error", true)?;

    h.type_text("#email", "user@example.com")?;
    h.submit("#login")?;
    h.assert_has_class("#email", "input-error", false)?;
    assert_eq!(h.take_form_submissions().len(), 1);
    Ok(())
}

#[test]
fn clicking_the_submit_button_triggers_validation() -> Result<()> {
    let html = r#"
        <form id='login' data-validate>
          <input id='email' required>
          <button id='go' type='submit'>Sign in</button>
        </form>
        "#;

    let mut h = Harness::from_html(html)?;
    h.click("#go")?;
    assert!(h.take_form_submissions().is_empty());
    assert_eq!(h.take_alert_messages().len(), 1);
    h.assert_has_class("#email", "input-error", true)?;
    Ok(())
}

#[test]
fn input_submit_control_also_triggers_the_form() -> Result<()> {
    let html = r#"
        <form id='login' data-validate>
          <input id='email' required value='user@example.com'>
          <input id='go' type='submit' value='Sign in'>
        </form>
        "#;

    let mut h = Harness::from_html(html)?;
    h.click("#go")?;
    assert_eq!(h.take_form_submissions().len(), 1);
    Ok(())
}

#[test]
fn forms_without_the_validate_marker_are_left_alone() -> Result<()> {
    let html = r#"
        <form id='search' action='/search'>
          <input id='q' required>
        </form>
        "#;

    let mut h = Harness::from_html(html)?;
    h.submit("#search")?;
    assert_eq!(h.take_form_submissions().len(), 1);
    h.assert_has_class("#q", "input-error", false)?;
    assert!(h.take_alert_messages().is_empty());
    Ok(())
}

#[test]
fn required_textarea_uses_its_text_as_initial_value() -> Result<()> {
    let html = r#"
        <form id='contact' data-validate>
          <textarea id='message' required>hello there</textarea>
        </form>
        "#;

    let mut h = Harness::from_html(html)?;
    h.submit("#contact")?;
    assert_eq!(h.take_form_submissions().len(), 1);
    h.assert_has_class("#message", "input-error", false)?;
    Ok(())
}

#[test]
fn empty_textarea_blocks_like_any_required_field() -> Result<()> {
    let html = r#"
        <form id='contact' data-validate>
          <textarea id='message' required></textarea>
        </form>
        "#;

    let mut h = Harness::from_html(html)?;
    h.submit("#contact")?;
    assert!(h.take_form_submissions().is_empty());
    h.assert_has_class("#message", "input-error", true)?;
    Ok(())
}

#[test]
fn alert_fires_once_per_blocked_submission() -> Result<()> {
    let html = r#"
        <form id='login' data-validate>
          <input id='email' required>
          <input id='password' type='password' required>
          <input id='code' required>
        </form>
        "#;

    let mut h = Harness::from_html(html)?;
    h.submit("#login")?;
    assert_eq!(h.take_alert_messages().len(), 1);
    h.submit("#login")?;
    assert_eq!(h.take_alert_messages().len(), 1);
    Ok(())
}

#[test]
fn only_fields_inside_the_submitted_form_are_checked() -> Result<()> {
    let html = r#"
        <form id='login' data-validate>
          <input id='email' required value='user@example.com'>
        </form>
        <form id='signup' data-validate>
          <input id='name' required>
        </form>
        "#;

    let mut h = Harness::from_html(html)?;
    h.submit("#login")?;
    assert_eq!(h.take_form_submissions().len(), 1);
    h.assert_has_class("#name", "input-error", false)?;
    Ok(())
}

#[test]
fn submit_on_an_element_outside_any_form_is_a_no_op() -> Result<()> {
    let html = r#"
        <div id='orphan'>loose</div>
        "#;

    let mut h = Harness::from_html(html)?;
    h.submit("#orphan")?;
    assert!(h.take_form_submissions().is_empty());
    Ok(())
}

#[test]
fn submit_method_defaults_to_get() -> Result<()> {
    let html = r#"
        <form id='search' action='/search'>
          <input id='q' value='rust'>
        </form>
        "#;

    let mut h = Harness::from_html(html)?;
    h.submit("#q")?;
    assert_eq!(
        h.take_form_submissions(),
        vec![FormSubmission {
            form: "form#search".to_string(),
            action: "/search".to_string(),
            method: "get".to_string(),
        }]
    );
    Ok(())
}
