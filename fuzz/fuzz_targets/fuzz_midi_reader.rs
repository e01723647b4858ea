#![no_main]

use beatkit_backend_beat::midi::read_midi;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = read_midi(data);
});
