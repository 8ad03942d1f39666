use super::*;

#[test]
fn primitive_indices_are_dense() {
    assert_eq!(Idx::NEVER.raw(), 0);
    assert_eq!(Idx::BYTEARRAY.raw(), Idx::PRIMITIVE_COUNT - 1);
    assert!(Idx::STR.is_primitive());
    assert!(!Idx::from_raw(Idx::PRIMITIVE_COUNT).is_primitive());
}

#[test]
fn debug_and_display() {
    assert_eq!(format!("{:?}", Idx::INT), "Idx::INT");
    assert_eq!(format!("{:?}", Idx::from_raw(40)), "Idx(40)");
    assert_eq!(Idx::NONE.to_string(), "None");
    assert_eq!(Idx::from_raw(40).to_string(), "type#40");
}
