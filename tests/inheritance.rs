#[macro_use]
mod common;

#[cfg(test)]
mod inheritance {
    tests! {
        inherit_method in inheritance is OK
        "from A"
    }

    tests! {
        override_method in inheritance is OK
        "B"
    }

    tests! {
        inherited_initializer in inheritance is OK
        "inherited"
    }

    tests! {
        superclass_must_be_class in inheritance is ERR
        "[line 2] Superclass must be a class"
    }

    tests! {
        inherit_from_self in inheritance is ERR
        "[line 1] error at 'A': A class cannot inherit from itself"
    }
}
