#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert!(
            std::panic::catch_unwind(|| { $run; }).is_err(),
            "expression failed to panic"
        );
        println!("^ panic caught");
    };
    ($run:block, $msg:literal) => {
        match std::panic::catch_unwind(|| { $run; }) {
            Ok(()) => panic!("expression failed to panic"),
            Err(payload) => {
                let text = payload
                    .downcast_ref::<String>()
                    .map(String::as_str)
                    .or_else(|| payload.downcast_ref::<&str>().copied())
                    .unwrap_or("<opaque payload>");
                assert_eq!(text, $msg, "panic message should match");
            }
        }
        println!("^ panic caught");
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
