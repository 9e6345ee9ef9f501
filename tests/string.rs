#[macro_use]
mod common;

#[cfg(test)]
mod string {
    tests! {
        concatenation in string is OK
        "Hello World"
    }

    tests! {
        multiline in string is OK
        "one"
        "two"
    }

    tests! {
        verbatim in string is OK
        "no \\n escapes"
    }

    tests! {
        unterminated in string is ERR
        "[line 1] error : Unterminated string"
    }
}
