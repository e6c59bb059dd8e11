use heritage_core::geometry::Vec2;
use heritage_core::viewer::{TourEvent, ViewerKey};

#[test]
fn test_parse_simple_events() {
    assert_eq!("next".parse::<TourEvent>().unwrap(), TourEvent::NextImage);
    assert_eq!("prev".parse::<TourEvent>().unwrap(), TourEvent::PreviousImage);
    assert_eq!("enter".parse::<TourEvent>().unwrap(), TourEvent::EnterImmersive);
    assert_eq!("exit".parse::<TourEvent>().unwrap(), TourEvent::ExitImmersive);
    assert_eq!("close".parse::<TourEvent>().unwrap(), TourEvent::Close);
    assert_eq!("reset".parse::<TourEvent>().unwrap(), TourEvent::Reset);
    assert_eq!("drag-end".parse::<TourEvent>().unwrap(), TourEvent::DragEnd);
}

#[test]
fn test_parse_events_with_arguments() {
    assert_eq!(
        "select:interior".parse::<TourEvent>().unwrap(),
        TourEvent::SelectTourPoint("interior".into())
    );
    assert_eq!(
        "drag-start:1.5,2".parse::<TourEvent>().unwrap(),
        TourEvent::DragStart(Vec2::new(1.5, 2.0))
    );
    assert_eq!(
        "drag:10,20,3,-4".parse::<TourEvent>().unwrap(),
        TourEvent::Drag {
            pointer: Vec2::new(10.0, 20.0),
            delta: Vec2::new(3.0, -4.0),
        }
    );
    assert_eq!("zoom:-0.2".parse::<TourEvent>().unwrap(), TourEvent::Zoom(-0.2));
    assert_eq!(
        "key:escape".parse::<TourEvent>().unwrap(),
        TourEvent::Key(ViewerKey::Escape)
    );
    assert_eq!(
        "key:R".parse::<TourEvent>().unwrap(),
        TourEvent::Key(ViewerKey::Char('R'))
    );
}

#[test]
fn test_parse_rejects_malformed() {
    for bad in ["", "jump", "select:", "zoom", "zoom:abc", "drag:1,2", "next:3", "key:"] {
        assert!(bad.parse::<TourEvent>().is_err(), "accepted {bad:?}");
    }
}

#[test]
fn test_display_parses_back() {
    let events = [
        TourEvent::SelectTourPoint("temple".into()),
        TourEvent::Drag {
            pointer: Vec2::new(4.0, 5.0),
            delta: Vec2::new(-1.0, 0.5),
        },
        TourEvent::Key(ViewerKey::ArrowLeft),
    ];
    for event in events {
        assert_eq!(event.to_string().parse::<TourEvent>().unwrap(), event);
    }
}
