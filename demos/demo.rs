use std::collections::HashMap;

use secret_password_store::{
    Arg, CollectionAlias, Schema, SchemaAttributeType, SchemaFlags, SearchFlags,
    build_attributes_with_schema, password,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let schema = Schema::new(
        "org.example.DemoPassword",
        SchemaFlags::None,
        HashMap::from([
            ("username".to_string(), SchemaAttributeType::String),
            ("port".to_string(), SchemaAttributeType::Integer),
            ("ssl".to_string(), SchemaAttributeType::Boolean),
        ]),
    )?;

    let attrs = build_attributes_with_schema(
        Some(&schema),
        [
            Arg::from("username"),
            Arg::from("demo-user"),
            Arg::from("port"),
            Arg::from(8080),
            Arg::from("ssl"),
            Arg::from(true),
        ],
    )?;

    password::store(
        Some(&schema),
        &attrs,
        CollectionAlias::Default,
        "secret-password-store demo",
        "correct horse battery staple",
    )?;
    println!("stored a password for demo-user");

    match password::lookup(Some(&schema), &attrs)? {
        Some(password) => println!("looked it up again: {password}"),
        None => println!("lookup found nothing!?"),
    }

    for item in password::search(Some(&schema), &attrs, SearchFlags::ALL)? {
        println!(
            "found item {:?} (created {}, modified {})",
            item.label(),
            item.created(),
            item.modified(),
        );
    }

    if password::clear(Some(&schema), &attrs)? {
        println!("cleaned up the demo item");
    }
    Ok(())
}
