#[macro_use]
mod common;

#[cfg(test)]
mod closure {
    tests! {
        counter in closure is OK
        "1"
        "2"
        "3"
    }

    tests! {
        observe_assignment_after_capture in closure is OK
        "before"
        "after"
        "after"
    }

    tests! {
        two_closures_share_environment in closure is OK
        "2"
    }

    tests! {
        closure_survives_scope_exit in closure is OK
        "kept alive"
    }

    tests! {
        body_binds_at_declaration in closure is OK
        "global"
        "global"
    }
}
