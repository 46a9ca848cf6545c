use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn new_carrier_is_empty() {
    let data = ProgramText::new();
    assert!(data.is_empty());
    assert_eq!(data.len(), 0);
    assert_eq!(data.contents(), "");
}

#[test]
fn append_and_prepend_edit_in_place() {
    let mut data = ProgramText::from("patches");
    data.prepend(" min-one-of ");
    data.append(" with [ num-occupying-farms = 0 ]");

    assert_eq!(
        data.contents(),
        " min-one-of patches with [ num-occupying-farms = 0 ]"
    );
}

#[test]
fn prepend_on_empty_carrier() {
    let mut data = ProgramText::new();
    data.prepend("farms");
    assert_eq!(data.contents(), "farms");
}

#[test]
fn duplicate_starts_with_same_contents() {
    let data = ProgramText::from("farms");
    let copy = data.duplicate();
    assert_eq!(copy, data);
}

#[test]
fn display_matches_contents() {
    let data = ProgramText::from(String::from("myself"));
    assert_eq!(data.to_string(), "myself");
    assert_eq!(data.into_string(), "myself");
}

proptest! {
    #[test]
    fn duplicate_is_independent_of_later_edits_to_source(
        start in ".{0,32}",
        edit in ".{1,16}",
    ) {
        let mut source = ProgramText::from(start.as_str());
        let copy = source.duplicate();

        source.append(&edit);
        source.prepend(&edit);

        prop_assert_eq!(copy.contents(), start.as_str());
    }

    #[test]
    fn source_is_independent_of_later_edits_to_duplicate(
        start in ".{0,32}",
        edit in ".{1,16}",
    ) {
        let source = ProgramText::from(start.as_str());
        let mut copy = source.duplicate();

        copy.append(&edit);
        copy.prepend(&edit);

        prop_assert_eq!(source.contents(), start.as_str());
    }
}
