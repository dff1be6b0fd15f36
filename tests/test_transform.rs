use rat_mask::{Color, LiteralRuns, MaskTransform, Placeholder, StyleSpan, transform};
use std::sync::Arc;
use std::thread;

#[test]
fn test_phone() {
    let m = MaskTransform::new("+7(***) ***-**-**", '*').expect("ok");
    assert_eq!(m.apply("9876543210").as_str(), "+7(987) 654-32-10");
    assert_eq!(m.apply("987").as_str(), "+7(987) ");
    assert_eq!(m.apply("98").as_str(), "+7(98");
    assert_eq!(m.apply("").as_str(), "+7(");
}

#[test]
fn test_card() {
    let m = MaskTransform::new("#### #### #### ####", '#').expect("ok");
    assert_eq!(
        m.apply("4111222233334444").as_str(),
        "4111 2222 3333 4444"
    );
    assert_eq!(m.apply("41112").as_str(), "4111 2");
}

#[test]
fn test_placeholder_tail() {
    let m = MaskTransform::new("%%/%%", '%')
        .expect("ok")
        .placeholder(Placeholder::new("MM/YY"));
    let t = m.apply("1");
    assert_eq!(t.as_str(), "1M/YY");
    assert_eq!(
        t.styled().spans(),
        &[StyleSpan {
            range: 1..5,
            color: None
        }]
    );

    assert_eq!(m.apply("12").as_str(), "12/YY");
    assert_eq!(m.apply("123").as_str(), "12/3Y");
    assert_eq!(m.apply("1234").as_str(), "12/34");
    assert!(m.apply("1234").styled().spans().is_empty());
}

#[test]
fn test_placeholder_empty_raw() {
    let m = MaskTransform::new("***-**", '*')
        .expect("ok")
        .placeholder(Placeholder::new("XXX-XX").color(Color::DarkGray));
    let t = m.apply("");
    assert_eq!(t.as_str(), "XXX-XX");
    assert_eq!(
        t.styled().spans(),
        &[StyleSpan {
            range: 0..6,
            color: Some(Color::DarkGray)
        }]
    );
    assert_eq!(t.raw_to_formatted(0), 0);
    assert_eq!(t.formatted_to_raw(3), 0);
}

#[test]
fn test_placeholder_shorter() {
    let m = MaskTransform::new("***-**", '*')
        .expect("ok")
        .placeholder(Placeholder::new("XX"));
    assert_eq!(m.apply("1").as_str(), "1X");
    assert_eq!(m.apply("12").as_str(), "12");
    assert_eq!(m.apply("1234").as_str(), "123-4");
    assert_eq!(m.apply("123456789").as_str(), "123-456789");

    let mut m = m;
    m.set_placeholder(Some(Placeholder::new("")));
    assert_eq!(m.apply("").as_str(), "");
    assert!(m.apply("").styled().spans().is_empty());
    m.set_placeholder(None);
    assert_eq!(m.apply("1").as_str(), "1");
}

#[test]
fn test_placeholder_multibyte() {
    let m = MaskTransform::new("**.**", '*')
        .expect("ok")
        .placeholder(Placeholder::new("ДД.ММ").color(Color::Rgb(80, 80, 80)));
    let t = m.apply("3");
    assert_eq!(t.as_str(), "3Д.ММ");
    assert_eq!(t.styled().len(), 5);
    assert_eq!(t.styled().spans()[0].range, 1..t.as_str().len());
}

#[test]
fn test_trailing_literal() {
    let m = MaskTransform::new("(**)", '*').expect("ok");
    assert_eq!(m.apply("").as_str(), "(");
    assert_eq!(m.apply("1").as_str(), "(1");
    assert_eq!(m.apply("12").as_str(), "(12)");
}

#[test]
fn test_overlong() {
    let m = MaskTransform::new("**-**", '*').expect("ok");
    let t = m.apply("1234567");
    assert_eq!(t.as_str(), "12-34567");
    assert_eq!(t.raw_to_formatted(7), 8);
    assert_eq!(t.raw_to_formatted(100), 8);
    assert_eq!(t.formatted_to_raw(8), 7);
    assert_eq!(t.formatted_to_raw(100), 7);
}

#[test]
fn test_graphemes() {
    let m = MaskTransform::new("**-**", '*').expect("ok");
    let t = m.apply("ä👍🏽ö");
    assert_eq!(t.as_str(), "ä👍🏽-ö");
    assert_eq!(t.offsets().raw_len(), 3);
    assert_eq!(t.raw_to_formatted(2), 3);
    assert_eq!(t.formatted_to_raw(3), 2);
}

#[test]
fn test_idempotent() {
    let m = MaskTransform::new("+7(***) ***-**-**", '*')
        .expect("ok")
        .placeholder(Placeholder::new("+7(___) ___-__-__"));
    let t1 = m.apply("98765");
    let t2 = m.apply("98765");
    assert_eq!(t1.text, t2.text);
    for i in 0..=20 {
        assert_eq!(t1.raw_to_formatted(i), t2.raw_to_formatted(i));
        assert_eq!(t1.formatted_to_raw(i), t2.formatted_to_raw(i));
    }
}

#[test]
fn test_free_fn() {
    let runs = LiteralRuns::parse("**/**", '*').expect("ok");
    let p = Placeholder::new("MM/YY");
    assert_eq!(transform("1", &runs, Some(&p)).as_str(), "1M/YY");
    assert_eq!(transform("12", &runs, None).as_str(), "12/");
}

#[test]
fn test_screen_column() {
    let m = MaskTransform::new("**-**", '*').expect("ok");
    let t = m.apply("日本語");
    assert_eq!(t.as_str(), "日本-語");
    assert_eq!(t.screen_column(0), 0);
    assert_eq!(t.screen_column(2), 5);
    assert_eq!(t.screen_column(3), 7);
    assert_eq!(t.styled().width(), 7);
}

#[test]
fn test_threads() {
    let m = Arc::new(
        MaskTransform::new("#### #### #### ####", '#')
            .expect("ok")
            .placeholder(Placeholder::new("0000 0000 0000 0000")),
    );

    let handles = (0..4)
        .map(|n| {
            let m = Arc::clone(&m);
            thread::spawn(move || {
                let raw = "4111222233334444"[..n * 4 + 1].to_string();
                m.apply(&raw).as_str().to_string()
            })
        })
        .collect::<Vec<_>>();

    let res = handles
        .into_iter()
        .map(|h| h.join().expect("join"))
        .collect::<Vec<_>>();
    assert_eq!(
        res,
        vec![
            "4000 0000 0000 0000",
            "4111 2000 0000 0000",
            "4111 2222 3000 0000",
            "4111 2222 3333 4000",
        ]
    );
}
