use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_edulink_env() {
    unsafe {
        for var in [
            "EDULINK_TEST_GEN_DELAY_MS",
            "EDULINK_CHAT_DELAY_MS",
            "EDULINK_CHAT_JITTER_MS",
            "EDULINK_UPLOAD_TICK_MS",
            "EDULINK_UPLOAD_MAX_STEP",
            "EDULINK_ANALYSIS_DELAY_MS",
            "EDULINK_VIDEO_SEARCH_DELAY_MS",
            "EDULINK_JOB_TIMEOUT_MS",
        ] {
            std::env::remove_var(var);
        }
    }
}

#[test]
fn env_config_cases() {
    // Defaults when nothing is set.
    unsafe { clear_edulink_env() };
    let cfg = EdulinkConfig::from_env().unwrap();
    assert_eq!(cfg, EdulinkConfig::default());
    assert_eq!(cfg.test_gen_delay, Duration::from_millis(2000));
    assert_eq!(cfg.analysis_delay, Duration::from_millis(3000));

    // Overrides parse.
    unsafe {
        std::env::set_var("EDULINK_CHAT_DELAY_MS", "250");
        std::env::set_var("EDULINK_UPLOAD_MAX_STEP", "40");
    }
    let cfg = EdulinkConfig::from_env().unwrap();
    assert_eq!(cfg.chat_delay, Duration::from_millis(250));
    assert!((cfg.upload_max_step - 40.0).abs() < f64::EPSILON);

    // Garbage is an error, not a silent default.
    unsafe { std::env::set_var("EDULINK_VIDEO_SEARCH_DELAY_MS", "soon") };
    let err = EdulinkConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "EDULINK_VIDEO_SEARCH_DELAY_MS", .. }));

    // Steps below one percent would stretch an upload without bound.
    for step in ["0", "0.01", "0.99", "NaN"] {
        unsafe {
            clear_edulink_env();
            std::env::set_var("EDULINK_UPLOAD_MAX_STEP", step);
        }
        let err = EdulinkConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "EDULINK_UPLOAD_MAX_STEP", .. }), "step {step}");
    }
    unsafe { std::env::set_var("EDULINK_UPLOAD_MAX_STEP", "1") };
    assert!(EdulinkConfig::from_env().is_ok());

    unsafe { clear_edulink_env() };
}

#[test]
fn delay_builders_follow_fields() {
    let cfg = EdulinkConfig::default();
    assert_eq!(cfg.test_gen(), Delay::Fixed(Duration::from_millis(2000)));
    assert_eq!(
        cfg.chat_reply(),
        Delay::Jittered { base: Duration::from_millis(1500), spread: Duration::from_millis(1000) }
    );
    assert!(matches!(cfg.pdf_upload(), Delay::Progress { settle, .. } if settle == Duration::from_millis(3000)));
}

#[test]
fn instant_config_has_no_waits() {
    let cfg = EdulinkConfig::instant();
    assert!(cfg.test_gen_delay.is_zero());
    assert!(cfg.chat_jitter.is_zero());
    assert!(cfg.upload_max_step > 0.0);
}
