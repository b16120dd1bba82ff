use crate::config::{Configuration, InterruptConfiguration};

#[test]
fn test_interrupt_configuration_from_register() {
    assert!(InterruptConfiguration::from_register(0b0000_0001).rx0_full);
    assert!(!InterruptConfiguration::from_register(0b1111_1110).rx0_full);

    assert!(InterruptConfiguration::from_register(0b0000_0010).rx1_full);
    assert!(!InterruptConfiguration::from_register(0b1111_1101).rx1_full);

    assert!(InterruptConfiguration::from_register(0b0000_0100).tx0_empty);
    assert!(!InterruptConfiguration::from_register(0b1111_1011).tx0_empty);

    assert!(InterruptConfiguration::from_register(0b0000_1000).tx1_empty);
    assert!(!InterruptConfiguration::from_register(0b1111_0111).tx1_empty);

    assert!(InterruptConfiguration::from_register(0b0001_0000).tx2_empty);
    assert!(!InterruptConfiguration::from_register(0b1110_1111).tx2_empty);

    assert!(InterruptConfiguration::from_register(0b0010_0000).error);
    assert!(!InterruptConfiguration::from_register(0b1101_1111).error);

    assert!(InterruptConfiguration::from_register(0b0100_0000).wake_up);
    assert!(!InterruptConfiguration::from_register(0b1011_1111).wake_up);

    assert!(InterruptConfiguration::from_register(0b1000_0000).message_error);
    assert!(!InterruptConfiguration::from_register(0b0111_1111).message_error);
}

#[test]
fn test_interrupt_configuration_as_register() {
    assert_eq!(0x0, InterruptConfiguration::default().as_register());

    assert_eq!(
        0b0000_0011,
        InterruptConfiguration {
            rx0_full: true,
            rx1_full: true,
            ..InterruptConfiguration::default()
        }
        .as_register()
    );

    assert_eq!(
        0b1110_0000,
        InterruptConfiguration {
            error: true,
            wake_up: true,
            message_error: true,
            ..InterruptConfiguration::default()
        }
        .as_register()
    );

    assert_eq!(
        0b0001_1100,
        InterruptConfiguration {
            tx0_empty: true,
            tx1_empty: true,
            tx2_empty: true,
            ..InterruptConfiguration::default()
        }
        .as_register()
    );
}

#[test]
fn test_default_configuration_matches_reset_state() {
    let config = Configuration::default();

    assert_eq!(0x0, u8::from(config.bit_timing.cnf1));
    assert_eq!(0x0, u8::from(config.bit_timing.cnf2));
    assert_eq!(0x0, u8::from(config.bit_timing.cnf3));
    assert_eq!(0x0, config.interrupts.as_register());
}
