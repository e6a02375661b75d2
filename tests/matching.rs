use http::Method;
use pretty_assertions::assert_eq;
use route_table::{Bindings, Error, RouteTableBuilder, CHUNK_SIZE};

mod helper;

fn bindings(pairs: &[(&str, &str)]) -> Bindings {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn static_routes_match_their_own_path() {
    let table = helper::blog_table();
    for (path, name) in [("/", "home"), ("/about/", "about"), ("/users", "users.index")] {
        let matched = table.match_route(&Method::GET, path).unwrap();
        assert_eq!(matched.route.name(), name);
        assert!(matched.bindings.is_empty());
    }
}

#[test]
fn trailing_slash_is_equivalent() {
    let table = helper::blog_table();
    assert_eq!(
        table.match_route(&Method::GET, "/about").unwrap().route.name(),
        "about"
    );
    assert_eq!(
        table.match_route(&Method::GET, "/users/").unwrap().route.name(),
        "users.index"
    );
}

#[test]
fn dynamic_routes_bind_variables() {
    let table = helper::blog_table();
    let matched = table.match_route(&Method::GET, "/users/42").unwrap();
    assert_eq!(matched.route.name(), "users.show");
    assert_eq!(matched.bindings, bindings(&[("id", "42")]));
    assert_eq!(&*matched.route.middleware()[0], "session");
}

#[test]
fn scoped_middleware_is_attached() {
    let table = helper::blog_table();
    let matched = table.match_route(&Method::PUT, "/users/42").unwrap();
    assert_eq!(matched.route.name(), "users.update");
    let middleware = matched
        .route
        .middleware()
        .iter()
        .map(|m| &**m)
        .collect::<Vec<_>>();
    assert_eq!(middleware, vec!["session", "auth"]);
}

#[test]
fn optional_segments_bind_what_is_present() {
    let table = helper::blog_table();
    let matched = table.match_route(&Method::GET, "/archive/2024").unwrap();
    assert_eq!(matched.bindings, bindings(&[("year", "2024")]));
    let matched = table.match_route(&Method::GET, "/archive/2024/05").unwrap();
    assert_eq!(matched.bindings, bindings(&[("year", "2024"), ("month", "05")]));
    let matched = table.match_route(&Method::GET, "/archive/2024/05/17").unwrap();
    assert_eq!(
        matched.bindings,
        bindings(&[("year", "2024"), ("month", "05"), ("day", "17")])
    );
    assert!(table.match_route(&Method::GET, "/archive/24").is_err());
}

#[test]
fn simple_optional_template() {
    let mut builder = RouteTableBuilder::new();
    builder.get("/a/{x}[/{y}]", ()).unwrap();
    let table = builder.build().unwrap();
    assert_eq!(
        table.match_route(&Method::GET, "/a/1").unwrap().bindings,
        bindings(&[("x", "1")])
    );
    assert_eq!(
        table.match_route(&Method::GET, "/a/1/2").unwrap().bindings,
        bindings(&[("x", "1"), ("y", "2")])
    );
}

#[test]
fn unknown_paths_are_not_found() {
    let table = helper::blog_table();
    assert_eq!(
        table.match_route(&Method::GET, "/nowhere").unwrap_err(),
        Error::not_found("/nowhere")
    );
    assert_eq!(
        table.match_route(&Method::PATCH, "/users/1").unwrap_err(),
        Error::not_found("/users/1")
    );
    assert_eq!(
        table.match_route(&Method::GET, "/nowhere").unwrap_err().status_code(),
        http::StatusCode::NOT_FOUND
    );
}

#[test]
fn every_route_across_chunk_boundaries_matches() {
    helper::setup_system();
    let mut builder = RouteTableBuilder::new();
    let count = CHUNK_SIZE * 2 + 1;
    for i in 0..count {
        let path = match i % 3 {
            0 => format!("/r{}/{{a}}", i),
            1 => format!("/r{}/{{a}}/{{b}}", i),
            _ => format!("/r{}/{{a}}[/{{b}}[/{{c}}]]", i),
        };
        builder.get(path, i).unwrap();
    }
    let table = builder.build().unwrap();
    for i in 0..count {
        let path = match i % 3 {
            0 => format!("/r{}/x", i),
            1 => format!("/r{}/x/y", i),
            _ => format!("/r{}/x/y/z", i),
        };
        let matched = table.match_route(&Method::GET, &path).unwrap();
        assert_eq!(*matched.route.handler(), i, "path {}", path);
        assert_eq!(matched.bindings.get("a").map(String::as_str), Some("x"));
    }
}

#[test]
fn eleven_routes_match_including_the_rollover() {
    let mut builder = RouteTableBuilder::new();
    for i in 0..=CHUNK_SIZE {
        builder.get(format!("/items{}/{{id}}", i), i).unwrap();
    }
    let table = builder.build().unwrap();
    for i in 0..=CHUNK_SIZE {
        let matched = table
            .match_route(&Method::GET, &format!("/items{}/7", i))
            .unwrap();
        assert_eq!(*matched.route.handler(), i);
        assert_eq!(matched.bindings, bindings(&[("id", "7")]));
    }
}

#[test]
fn earlier_dynamic_route_wins() {
    let mut builder = RouteTableBuilder::new();
    builder.get("/{section}/{page}", "generic").unwrap();
    builder.get("/docs/{page}", "docs").unwrap();
    builder.get("/docs/index", "static").unwrap();
    let table = builder.build().unwrap();
    assert_eq!(
        *table.match_route(&Method::GET, "/docs/intro").unwrap().route.handler(),
        "generic"
    );
    assert_eq!(
        *table.match_route(&Method::GET, "/docs/index").unwrap().route.handler(),
        "static"
    );
}
