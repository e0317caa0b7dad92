pub const CITY_GRAPH_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/graphs/city.toml"
));

pub const TIE_GRAPH_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/graphs/tie.toml"
));

pub const DEAD_END_GRAPH_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/graphs/dead_end.toml"
));

pub const UNREACHABLE_GRAPH_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/graphs/unreachable.toml"
));

pub const CYCLIC_GRAPH_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/graphs/cyclic.toml"
));
