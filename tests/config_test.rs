use audiomigrate::config;

#[test]
fn test_config_exposes_server_and_api_settings() {
    // Sole test in this binary, so mutating the process environment is safe.
    unsafe {
        std::env::set_var("SERVER_ADDRESS", "127.0.0.1:9090");
        std::env::set_var("SPOTIFY_API_URL", "https://api.spotify.test/v1");
    }

    assert_eq!(config::server_addr(), "127.0.0.1:9090");
    assert_eq!(config::spotify_apiurl(), "https://api.spotify.test/v1");
}
