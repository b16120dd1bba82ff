use crate::registers::*;

#[test]
fn test_cnf1() {
    assert_eq!([0b1100_0111], Cnf1::new().with_sjw(3).with_brp(7).into_bytes());
}

#[test]
fn test_cnf2() {
    assert_eq!([0b1001_0000], Cnf2::new().with_btlmode(true).with_phseg1(2).into_bytes());
    assert_eq!(
        [0b0101_0011],
        Cnf2::new().with_sam(true).with_phseg1(2).with_prseg(3).into_bytes()
    );
}

#[test]
fn test_cnf3() {
    assert_eq!([0b1000_0010], Cnf3::new().with_sof(true).with_phseg2(2).into_bytes());
    assert_eq!([0b0100_0000], Cnf3::new().with_wakfil(true).into_bytes());
}

#[test]
fn test_cnf3_phase_segment_2() {
    let cnf3 = Cnf3::new().with_phase_segment_2(8);

    assert_eq!(8, cnf3.get_phase_segment_2());
    assert_eq!([0b0000_0111], cnf3.into_bytes());

    // length is clamped to the valid range
    assert_eq!(2, Cnf3::new().with_phase_segment_2(0).get_phase_segment_2());
    assert_eq!(8, Cnf3::new().with_phase_segment_2(100).get_phase_segment_2());
}
