#[macro_use]
mod common;

#[cfg(test)]
mod comment {
    tests! {
        line_comment in comment is OK
        "1"
        "2"
    }

    tests! {
        block_comment in comment is OK
        "1"
        "2"
    }

    tests! {
        multiline_block_comment in comment is OK
        "before"
        "after"
    }

    tests! {
        block_comment_does_not_nest in comment is OK
        "code"
    }

    tests! {
        lines_counted_through_comments in comment is ERR
        "[line 4] Undefined variable 'x'"
    }

    tests! {
        unterminated_block_comment in comment is ERR
        "[line 1] error : Unterminated block comment"
    }
}
