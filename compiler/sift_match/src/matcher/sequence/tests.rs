use super::Layout;

#[test]
fn layout_without_star_is_positional() {
    let layout = Layout { len: 3, star: None };
    assert_eq!(layout.required(), 3);
    assert!(layout.fits(3));
    assert!(!layout.fits(2));
    assert!(!layout.fits(4));
    assert_eq!(layout.slot_of_item(2, 3), 2);
    assert_eq!(layout.items_of_slot(1, 3), 1..2);
}

#[test]
fn star_absorbs_the_middle() {
    // [a, *rest, b] against five items: rest takes items 1..4.
    let layout = Layout {
        len: 3,
        star: Some(1),
    };
    assert_eq!(layout.required(), 2);
    assert!(layout.fits(2));
    assert!(layout.fits(5));
    assert!(!layout.fits(1));
    assert_eq!(layout.items_of_slot(0, 5), 0..1);
    assert_eq!(layout.items_of_slot(1, 5), 1..4);
    assert_eq!(layout.items_of_slot(2, 5), 4..5);
    let slots: Vec<usize> = (0..5).map(|item| layout.slot_of_item(item, 5)).collect();
    assert_eq!(slots, vec![0, 1, 1, 1, 2]);
}

#[test]
fn empty_star() {
    let layout = Layout {
        len: 2,
        star: Some(0),
    };
    assert!(layout.fits(1));
    assert!(layout.items_of_slot(0, 1).is_empty());
    assert_eq!(layout.items_of_slot(1, 1), 0..1);
    assert_eq!(layout.slot_of_item(0, 1), 1);
}
