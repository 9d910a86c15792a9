use crate::test;

test!(
    full_bag_refuses_adds,
    capacity = 1,
    r#"
    add a
    add b
    undo
    undo
    add b
    show
    "#,
    r#"
    true
    false
    true
    false
    true
    {b}
    "#
);

test!(
    refused_add_keeps_redo,
    capacity = 2,
    r#"
    add a
    add b
    remove a
    undo
    add c
    redo
    show
    "#,
    r#"
    true
    true
    true
    true
    false
    true
    {b}
    "#
);

test!(
    undo_of_removal_has_room,
    capacity = 2,
    r#"
    add a
    add a
    remove
    undo
    size
    add c
    "#,
    r#"
    true
    true
    a
    true
    2
    false
    "#
);

test!(
    zero_capacity,
    capacity = 0,
    r#"
    add a
    remove
    undo
    "#,
    r#"
    false
    (empty)
    false
    "#
);
