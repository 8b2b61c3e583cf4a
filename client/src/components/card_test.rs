use super::*;

#[test]
fn closed_card_mounts_no_body() {
    let node = normalize(&ContentValue::Text("buffed Q".to_owned()));
    assert_eq!(card_body(false, &node), None);
}

#[test]
fn open_card_mounts_normalized_content() {
    let node = normalize(&ContentValue::List(vec!["Q damage up".to_owned(), "W cost down".to_owned()]));
    assert_eq!(
        card_body(true, &node),
        Some(ContentNode::List(vec!["Q damage up".to_owned(), "W cost down".to_owned()]))
    );
}
