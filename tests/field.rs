#[macro_use]
mod common;

#[cfg(test)]
mod field {
    tests! {
        get_and_set in field is OK
        "42"
    }

    tests! {
        fields_are_per_instance in field is OK
        "a"
        "b"
    }

    tests! {
        set_evaluates_to_value in field is OK
        "stored"
    }

    tests! {
        shared_identity in field is OK
        "shared"
    }

    tests! {
        undefined_property in field is ERR
        "[line 2] Undefined property 'missing'"
    }

    tests! {
        property_on_string in field is ERR
        "[line 1] only instances have properties"
    }

    tests! {
        field_on_number in field is ERR
        "[line 2] only instances have fields"
    }
}
