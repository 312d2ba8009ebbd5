use failure::Error;
use log::info;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::TermLogger;
use sprite_button::menu::ButtonBuilder;
use sprite_button::menu::Component;
use sprite_button::menu::TextAlign;
use sprite_button::menu::TextStyle;
use sprite_button::scene::headless::HeadlessScene;
use std::cell::RefCell;
use std::rc::Rc;
use vek::vec::Vec2;

// A main menu driven by a scripted pointer instead of a window
fn main() -> Result<(), Error> {
    TermLogger::init(LevelFilter::Trace, Config::default()).unwrap();

    let mut scene = HeadlessScene::new();
    scene.textures_mut().register("btn_up", 256, 64);
    scene.textures_mut().register("btn_down", 256, 64);

    let selected = Rc::new(RefCell::new(Vec::new()));
    let style = TextStyle::new()
        .with_font("hack")
        .with_size(32.0)
        .with_align(TextAlign::Center);

    let mut buttons = Vec::new();
    for (index, name) in ["Play", "Options", "Quit"].iter().enumerate() {
        let log = Rc::clone(&selected);
        let name = name.to_string();
        let button = ButtonBuilder::new("btn_up", "btn_down")
            .with_position(400.0, 200.0 + index as f32 * 80.0)
            .with_size(192.0, 48.0)
            .with_text(&name)
            .with_style(style.clone())
            .with_callback(move || log.borrow_mut().push(name.clone()))
            .build(&mut scene)?;
        buttons.push(button);
    }

    // click "Options", then press "Quit" and drag off it
    scene.pointer_down(Vec2::new(400.0, 280.0))?;
    scene.pointer_up(Vec2::new(400.0, 280.0))?;
    scene.pointer_down(Vec2::new(420.0, 360.0))?;
    info!("Quit is {:?} while held", buttons[2].state()?);
    scene.pointer_move(Vec2::new(700.0, 360.0))?;
    info!("Quit is {:?} after dragging off", buttons[2].state()?);
    scene.pointer_up(Vec2::new(700.0, 360.0))?;

    for button in &mut buttons {
        button.set_button_size(256.0, 64.0)?.set_text_style(&style.clone().with_size(40.0))?;
        info!("{:?} at {:?}", button, button.position()?);
    }

    info!("Pressed: {:?}", selected.borrow());

    for button in buttons {
        button.destroy()?;
    }
    info!("{:?}", scene);

    Ok(())
}
