use std::cell::RefCell;
use std::fs::File;
use std::rc::Rc;

use rangedom::to_html;
use rangekit::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

const CONFIG: &str = r#"{
    "min": 0,
    "max": 100,
    "step_size": 2,
    "label_step_size": 20,
    "default_track_intent": "success"
}"#;

fn bounds_props(key: &str) -> HandleProps {
    match key {
        "dangerStart" => HandleProps::start().intent_before(Intent::Danger),
        "warningStart" => HandleProps::start().intent_before(Intent::Warning),
        "warningEnd" => HandleProps::end().intent_after(Intent::Warning),
        "dangerEnd" => HandleProps::end().intent_after(Intent::Danger),
        _ => HandleProps::new(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("intent_bounds.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let config = SliderConfig::from_json(CONFIG)?;
    let values = SliderValues::new()
        .with("dangerStart", 12.0)
        .with("warningStart", 36.0)
        .with("warningEnd", 72.0)
        .with("dangerEnd", 90.0);

    // Owner state, committed on release
    let committed = Rc::new(RefCell::new(values.clone()));
    let on_release = Rc::clone(&committed);

    let mut slider = MultiRangeSlider::new(config, values)?
        .id("bounds")
        .handle_props(bounds_props)
        .on_change(|values| println!("change  {values:?}"))
        .on_release(move |values| *on_release.borrow_mut() = values.clone());

    // 400px wide track at x=20
    slider.layout(TrackGeometry::new(20.0, 0.0, 400.0));
    println!("{}\n", to_html(&slider.render()));

    // Drag warningStart (36 -> x=164) past warningEnd (72 -> x=308)
    let events = [
        Event::PointerDown(PointerEvent::mouse(164.0, 10.0).target("bounds-handle-1")),
        Event::PointerMove(PointerEvent::mouse(240.0, 10.0)),
        Event::PointerMove(PointerEvent::mouse(340.0, 10.0)),
        Event::PointerUp(PointerEvent::mouse(340.0, 10.0)),
    ];
    for event in &events {
        if !slider.handle_event(event).is_handled() {
            println!("ignored {event:?}");
        }
    }

    let released = committed.borrow().clone();
    println!("release {released:?}\n");
    slider.set_values(released);
    println!("{}", to_html(&slider.render()));

    Ok(())
}
