#[macro_use]
mod common;

#[cfg(test)]
mod misc {
    tests! {
        empty_file in misc is OK
    }

    tests! {
        clock_is_native in misc is OK
        "<native function>"
    }

    tests! {
        clock_returns_number in misc is OK
        "true"
    }

    tests! {
        unexpected_character in misc is ERR
        "[line 1] error : Unexpected character '|'"
    }

    tests! {
        every_scan_error_reported in misc is ERR
        "[line 1] error : Unexpected character '@'"
        "[line 2] error : Unexpected character '#'"
    }

    tests! {
        parse_error_stops_interpretation in misc is ERR
        "[line 2] error at ';': Expect expression"
    }

    tests! {
        parse_error_at_end in misc is ERR
        "[line 1] error at end: Expect ';' after value"
    }

    tests! {
        runtime_error_stops_execution in misc is ERR
        "[line 2] operands must be two numbers or two strings"
    }
}
