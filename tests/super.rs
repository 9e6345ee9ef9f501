#[macro_use]
mod common;

#[cfg(test)]
mod super_expr {
    tests! {
        calls_superclass_method in super_expr is OK
        "A"
        "B"
    }

    tests! {
        skips_own_override in super_expr is OK
        "B"
    }

    tests! {
        outside_class in super_expr is ERR
        "[line 1] error at 'super': Cannot use 'super' outside of a class"
    }

    tests! {
        without_superclass in super_expr is ERR
        "[line 2] error at 'super': Cannot use 'super' in a class with no superclass"
    }
}
