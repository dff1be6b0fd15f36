use log::debug;
use rat_mask::{Color, MaskTransform, Placeholder};

fn main() -> Result<(), anyhow::Error> {
    setup_logging()?;

    let masks = [
        (
            MaskTransform::new("+7(***) ***-**-**", '*')?
                .placeholder(Placeholder::new("+7(___) ___-__-__").color(Color::DarkGray)),
            "9876543210",
        ),
        (
            MaskTransform::new("#### #### #### ####", '#')?,
            "4111222233334444",
        ),
        (
            MaskTransform::new("%%/%%", '%')?.placeholder(Placeholder::new("MM/YY")),
            "1225",
        ),
    ];

    for (mask, input) in masks.iter() {
        println!("{}", mask.template());
        let mut raw = String::new();
        for c in input.chars() {
            raw.push(c);
            let t = mask.apply(&raw);
            let cursor = t.raw_to_formatted(t.offsets().raw_len());
            debug!("{:?} -> {:?} cursor {}", raw, t.as_str(), cursor);
            println!(
                "    {:<18} {:<20} cursor {:>2} col {:>2}",
                raw,
                t.as_str(),
                cursor,
                t.screen_column(t.offsets().raw_len())
            );
        }
    }

    Ok(())
}

fn setup_logging() -> Result<(), anyhow::Error> {
    fern::Dispatch::new()
        .format(|out, message, _| out.finish(format_args!("{}", message)))
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file("mask_demo.log")?)
        .apply()?;
    Ok(())
}
