use crate::{test, test_unsupported};

mod bounded;

test!(
    comments_and_blank_lines,
    r#"
    # nothing here is a command

    add a
        # indented comment
    size
    "#,
    r#"
    true
    1
    "#
);

test!(
    queries_do_not_touch_history,
    r#"
    add a
    add a
    contains a
    contains b
    count a
    size
    show
    undo
    count a
    "#,
    r#"
    true
    true
    true
    false
    2
    2
    {a, a}
    true
    1
    "#
);

test_unsupported!(
    clear_on_empty_bag,
    r#"
    clear
    add a
    "#,
    "",
    line = 2
);

test_unsupported!(
    clear_stops_the_script,
    r#"
    add a
    add b
    clear
    size
    "#,
    r#"
    true
    true
    "#,
    line = 4
);
