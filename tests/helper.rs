use std::{env, sync::Once};

use route_table::{GroupOptions, RouteSpec, RouteTable, RouteTableBuilder};

static INSTALL: Once = Once::new();

pub fn setup_system() {
    if env::var("CI").is_err() {
        INSTALL.call_once(|| {
            env::set_var("APP_ENV", "d");
            env::set_var("RUST_LOG", "debug");
            env::set_var("RUST_BACKTRACE", "0");
            essentials::install();
        });
    }
}

/// Routes of a small blog application, handlers are the route names.
#[allow(dead_code)]
pub fn blog_table() -> RouteTable<&'static str> {
    setup_system();
    let mut builder = RouteTableBuilder::new();
    builder.get(RouteSpec::new("/").with_name("home"), "home").unwrap();
    builder
        .get(RouteSpec::new("/about/").with_name("about"), "about")
        .unwrap();
    builder
        .group(GroupOptions::new("/users").with_middleware("session"), |users| {
            users.get(RouteSpec::new("").with_name("users.index"), "users.index")?;
            users.get(RouteSpec::new("/{id}").with_name("users.show"), "users.show")?;
            users.middleware("auth", |admin| {
                admin.put(RouteSpec::new("/{id}").with_name("users.update"), "users.update")?;
                admin.delete(RouteSpec::new("/{id}").with_name("users.delete"), "users.delete")?;
                Ok(())
            })
        })
        .unwrap();
    builder
        .get(
            RouteSpec::new("/archive/{year:\\d{4}}[/{month:\\d{2}}[/{day:\\d{2}}]]")
                .with_name("archive"),
            "archive",
        )
        .unwrap();
    builder
        .get(
            RouteSpec::new("/posts/{slug}")
                .with_name("posts.show")
                .with_default("lang", "en"),
            "posts.show",
        )
        .unwrap();
    builder.build().unwrap()
}
