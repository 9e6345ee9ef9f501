#[macro_use]
mod common;

#[cfg(test)]
mod variable {
    tests! {
        global_and_local in variable is OK
        "2"
        "1"
    }

    tests! {
        uninitialized_is_nil in variable is OK
        "nil"
    }

    tests! {
        reassignment in variable is OK
        "2"
        "3"
    }

    tests! {
        shadow_in_block in variable is OK
        "block"
        "global"
    }

    tests! {
        redeclare_global in variable is OK
        "2"
    }

    tests! {
        assignment_is_an_expression in variable is OK
        "3"
        "3"
    }

    tests! {
        undefined in variable is ERR
        "[line 1] Undefined variable 'a'"
    }

    tests! {
        assign_undefined in variable is ERR
        "[line 1] Undefined variable 'a'"
    }

    tests! {
        read_in_own_initializer in variable is ERR
        "[line 2] error at 'a': cannot read variable in its own initializer"
    }

    tests! {
        duplicate_local in variable is ERR
        "[line 3] error at 'a': A variable is already defined with name 'a' in this scope"
    }
}
