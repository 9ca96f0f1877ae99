use super::*;

fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
}

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, ServerConfig { host: "0.0.0.0".into(), port: 3000 });
    assert_eq!(config.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn explicit_values_are_used() {
    let config = ServerConfig::from_lookup(lookup(&[("BIND_HOST", " 127.0.0.1 "), ("PORT", "8081")])).unwrap();
    assert_eq!(config.bind_addr(), "127.0.0.1:8081");
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "http".into() });
    assert_eq!(err.to_string(), "invalid PORT: \"http\"");
}

#[test]
fn out_of_range_port_is_rejected() {
    assert!(ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}

#[test]
fn blank_host_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("BIND_HOST", "  ")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "BIND_HOST", .. }));
}

#[test]
fn from_env_reads_process_environment() {
    unsafe { std::env::set_var("PORT", "4100") };
    let config = ServerConfig::from_env();
    unsafe { std::env::remove_var("PORT") };
    assert_eq!(config.unwrap().port, 4100);
}
