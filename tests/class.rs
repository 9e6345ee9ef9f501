#[macro_use]
mod common;

#[cfg(test)]
mod class {
    tests! {
        class_displays_as_name in class is OK
        "Foo"
    }

    tests! {
        instance_displays_with_class_name in class is OK
        "Foo instance"
    }

    tests! {
        instances_are_distinct in class is OK
        "false"
        "true"
    }
}
