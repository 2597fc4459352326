use opencode_wrappers::models::resolve;
use opencode_wrappers::prompt::assemble;
use proptest::prelude::*;

proptest! {
  // An entry that is literally in the catalog always resolves to
  // itself, whatever else the catalog holds.
  #[test]
  fn exact_catalog_hits_resolve_to_themselves(
    name in "[A-Za-z0-9/_.-]{1,24}",
    rest in proptest::collection::vec("[A-Za-z0-9/_.-]{1,24}", 0..6),
  ) {
    let mut catalog: Vec<String> = rest;
    catalog.push(name.clone());

    prop_assert_eq!(resolve(&name, &catalog).unwrap(), name);
  }

  #[test]
  fn assembled_prompts_keep_the_diff_fenced(
    template in "[ -~\t\n]{0,200}",
    diff in "[ -~\t\n]{0,200}",
  ) {
    let out = assemble(&template, &diff);

    prop_assert!(out.ends_with("</GIT_DIFF>"));
    prop_assert!(out.starts_with(template.trim_end()));
    prop_assert!(out.contains(diff.trim_end()));
    prop_assert!(out.contains("\n\n<GIT_DIFF>\n"));
  }
}
