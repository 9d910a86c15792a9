#![no_main]
use libfuzzer_sys::fuzz_target;
use ubag::{script::run_script, ArrayBag, UndoableBag};

fuzz_target!(|input: (u8, &str)| {
    let (capacity, script) = input;
    let mut bag = UndoableBag::with_bag(ArrayBag::bounded(capacity as usize));
    run_script(&mut bag, script, &mut std::io::sink()).ok();
});
