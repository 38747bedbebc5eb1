#![no_main]

use libfuzzer_sys::fuzz_target;
use netaddr_core::core::mask::{apply_mask, host_portion_is_zero, masked_cmp, masked_copy};

fuzz_target!(|data: &[u8]| {
    if data.len() < 33 {
        return;
    }

    let mut a = [0u8; 16];
    let mut b = [0u8; 16];
    a.copy_from_slice(&data[1..17]);
    b.copy_from_slice(&data[17..33]);

    // Stay inside the documented prefix range; violations panic by contract
    let bits = data[0] % 129;

    let ordering = masked_cmp(&a, &b, bits);

    let mut ma = a;
    let mut mb = b;
    apply_mask(&mut ma, bits);
    apply_mask(&mut mb, bits);

    // Masked comparison must agree with comparing masked copies
    assert_eq!(ordering, ma.cmp(&mb));
    assert!(host_portion_is_zero(&ma, bits));

    // masked_copy must equal apply_mask on the source
    let mut copied = b;
    masked_copy(&mut copied, &a, bits);
    assert_eq!(copied, ma);
});
