use super::*;

#[test]
fn instructions_are_numbered_in_order() {
    let text = instructions();
    assert!(text.starts_with("How to use\n\n1. Click the 'Choose an image...'"));
    assert!(text.contains("4. Click 'Download Sketch' to save your artwork\n"));
    assert!(text.trim_end().ends_with(HOW_TO_TIP));
}
