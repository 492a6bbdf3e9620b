use super::*;

#[test]
fn first_click_reveals_password_and_updates_label() -> Result<()> {
    let html = r#"
        <input id='password' type='password' value='hunter2'>
        <button id='reveal' type='button' data-toggle-password='password'>Show</button>
        "#;

    let mut h = Harness::from_html(html)?;
    h.click("#reveal")?;
    h.assert_attr("#password", "type", "text")?;
    h.assert_text("#reveal", "Hide")?;
    Ok(())
}

#[test]
fn second_click_masks_the_input_again() -> Result<()> {
    let html = r#"
        <input id='password' type='password'>
        <button id='reveal' type='button' data-toggle-password='password'>Show</button>
        "#;

    let mut h = Harness::from_html(html)?;
    h.click("#reveal")?;
    h.click("#reveal")?;
    h.assert_attr("#password", "type", "password")?;
    h.assert_text("#reveal", "Show")?;
    Ok(())
}

#[test]
fn toggling_preserves_the_typed_value() -> Result<()> {
    let html = r#"
        <input id='password' type='password'>
        <button id='reveal' type='button' data-toggle-password='password'>Show</button>
        "#;

    let mut h = Harness::from_html(html)?;
    h.type_text("#password", "s3cret")?;
    h.click("#reveal")?;
    h.assert_value("#password", "s3cret")?;
    h.click("#reveal")?;
    h.assert_value("#password", "s3cret")?;
    Ok(())
}

#[test]
fn missing_target_id_is_a_silent_no_op() -> Result<()> {
    let html = r#"
        <div id='wrap'>
          <input id='password' type='password'>
          <button id='reveal' type='button' data-toggle-password='nonexistent'>Show</button>
        </div>
        "#;

    let mut h = Harness::from_html(html)?;
    let before = h.dump_dom("#wrap")?;
    h.click("#reveal")?;
    assert_eq!(h.dump_dom("#wrap")?, before);
    assert!(h.take_alert_messages().is_empty());
    Ok(())
}

#[test]
fn input_without_type_attribute_is_masked_on_first_click() -> Result<()> {
    let html = r#"
        <input id='plain'>
        <button id='reveal' type='button' data-toggle-password='plain'>Show</button>
        "#;

    let mut h = Harness::from_html(html)?;
    h.click("#reveal")?;
    h.assert_attr("#plain", "type", "password")?;
    h.assert_text("#reveal", "Show")?;
    Ok(())
}

#[test]
fn multiple_toggles_operate_independently() -> Result<()> {
    let html = r#"
        <input id='first' type='password'>
        <button id='reveal-first' type='button' data-toggle-password='first'>Show</button>
        <input id='second' type='password'>
        <button id='reveal-second' type='button' data-toggle-password='second'>Show</button>
        "#;

    let mut h = Harness::from_html(html)?;
    h.click("#reveal-first")?;
    h.assert_attr("#first", "type", "text")?;
    h.assert_attr("#second", "type", "password")?;
    h.assert_text("#reveal-first", "Hide")?;
    h.assert_text("#reveal-second", "Show")?;
    Ok(())
}

#[test]
fn click_on_nested_markup_bubbles_to_the_control() -> Result<()> {
    let html = r#"
        <input id='password' type='password'>
        <button id='reveal' type='button' data-toggle-password='password'><span id='eye'>Show</span></button>
        "#;

    let mut h = Harness::from_html(html)?;
    h.click("#eye")?;
    h.assert_attr("#password", "type", "text")?;
    h.assert_text("#reveal", "Hide")?;
    Ok(())
}

#[test]
fn disabled_control_ignores_clicks() -> Result<()> {
    let html = r#"
        <input id='password' type='password'>
        <button id='reveal' type='button' disabled data-toggle-password='password'>Show</button>
        "#;

    let mut h = Harness::from_html(html)?;
    h.click("#reveal")?;
    h.assert_attr("#password", "type", "password")?;
    h.assert_text("#reveal", "Show")?;
    Ok(())
}
