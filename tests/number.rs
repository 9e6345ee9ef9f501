#[macro_use]
mod common;

#[cfg(test)]
mod number {
    tests! {
        integral_display in number is OK
        "7"
        "7"
        "2.5"
        "2.5"
        "0.75"
    }

    tests! {
        decimal_display in number is OK
        "123.456"
        "0"
    }
}
