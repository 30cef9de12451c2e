#[test]
fn bemt_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/bemt_error_pass.rs");
    t.pass("tests/ui/bemt_error_context.rs");
}
