use console::Style;
use heritage_core::catalog::{FestivalListing, SiteRecord};
use heritage_core::viewer::{TourEvent, TourNavigator, ViewMode};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    accent: Style,
    disabled: Style,
    link: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().yellow().bold(),
            header: Style::new().yellow().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            accent: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            link: Style::new().underlined(),
        }
    }
}

fn rule(len: usize) -> String {
    "\u{2550}".repeat(len)
}

/// One line per site: id, name, location and tradition.
pub fn print_site_list(sites: &[&SiteRecord]) {
    let s = Styles::new();

    if sites.is_empty() {
        println!("  {}", s.disabled.apply_to("No sites found matching your criteria."));
        return;
    }

    for site in sites {
        println!(
            "  {:<18}{}",
            s.label.apply_to(&site.id),
            s.value.apply_to(&site.name)
        );
        println!(
            "  {:<18}{}, {}",
            "",
            site.location,
            s.accent.apply_to(&site.tradition)
        );
    }
    println!();
    println!("  {} site(s)", sites.len());
}

/// Overview, architecture, spiritual and visit sections of one site.
pub fn print_site_details(site: &SiteRecord) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to(&site.name));
    println!("  {}", s.title.apply_to(rule(site.name.chars().count())));
    println!("  {}", site.location);
    println!();

    // Overview
    println!("  {}", s.header.apply_to("Overview"));
    println!("    {}", site.description);
    field(&s, "Tradition", &site.tradition);
    field(&s, "Founded", site.founded_or_default());
    if !site.altitude.is_empty() {
        field(&s, "Altitude", &site.altitude);
    }
    if let Some(ref c) = site.coordinates {
        field(&s, "Coordinates", &format!("{:.4}, {:.4}", c.lat, c.lng));
    }
    if !site.highlights.is_empty() {
        println!("    {}", s.label.apply_to("Highlights"));
        for highlight in &site.highlights {
            println!("      \u{2605} {highlight}");
        }
    }
    println!();

    // Architecture
    section(&s, "Architecture", &site.architecture);

    // Spiritual
    section(&s, "Spiritual Significance", &site.spiritual_significance);
    if !site.cultural_importance.is_empty() {
        println!("    {}", site.cultural_importance);
        println!();
    }

    // Visit info
    println!("  {}", s.header.apply_to("Visit Info"));
    field(&s, "Hours", &site.visiting_hours);
    field(&s, "Entrance", &site.entrance_fee);
    field(&s, "Access", &site.accessibility);
    let travel = &site.travel_info;
    field(&s, "Best time", &travel.best_time_to_visit);
    field(&s, "Airport", &travel.nearest_airport);
    field(&s, "Transport", &travel.local_transport);
    field(&s, "Permits", &travel.permits_required);
    field(&s, "Weather", &travel.weather_info);
    if !travel.accommodation.is_empty() {
        field(&s, "Stay", &travel.accommodation.join(", "));
    }
    println!();

    if !site.festivals.is_empty() {
        println!("  {}", s.header.apply_to("Festivals"));
        for festival in &site.festivals {
            println!(
                "    {} {}",
                s.value.apply_to(&festival.name),
                s.label.apply_to(format!("({})", festival.date))
            );
            println!("      {}", festival.description);
        }
        println!();
    }

    println!("  {}", s.header.apply_to("Images"));
    field(&s, "Gallery", &format!("{}", site.gallery().len()));
    field(&s, "Panoramic", &format!("{}", site.panorama().len()));
    println!(
        "    {:<14}{}",
        s.label.apply_to("Main"),
        s.link.apply_to(&site.main_image)
    );
    println!();
}

fn field(s: &Styles, label: &str, value: &str) {
    if value.is_empty() {
        println!(
            "    {:<14}{}",
            s.label.apply_to(label),
            s.disabled.apply_to("unknown")
        );
    } else {
        println!("    {:<14}{}", s.label.apply_to(label), value);
    }
}

fn section(s: &Styles, header: &str, body: &str) {
    println!("  {}", s.header.apply_to(header));
    if body.is_empty() {
        println!("    {}", s.disabled.apply_to("not documented"));
    } else {
        println!("    {body}");
    }
    println!();
}

pub fn print_festivals(festivals: &[FestivalListing<'_>]) {
    let s = Styles::new();
    for listing in festivals {
        println!(
            "  {:<22}{:<18}{}",
            s.value.apply_to(&listing.festival.name),
            s.label.apply_to(&listing.festival.date),
            s.accent.apply_to(listing.site_name)
        );
        println!("  {:<40}{}", "", listing.festival.significance);
    }
}

/// State of the tour after `event`.
pub fn print_tour_step(step: usize, event: &TourEvent, nav: &TourNavigator) {
    let s = Styles::new();
    let state = nav.state();
    let point = nav.active_tour_point();

    let view = match (nav.mode(), nav.immersive()) {
        (ViewMode::Immersive, Some(c)) => {
            let t = c.state();
            format!(
                "{} {}/{} {} rot {:.1}\u{b0} zoom {:.2} offset ({:.1}, {:.1}){}",
                s.accent.apply_to("immersive"),
                t.active_image_index + 1,
                c.image_count(),
                s.link.apply_to(c.current_image()),
                t.rotation_degrees,
                t.zoom_factor,
                t.offset.x,
                t.offset.y,
                if t.dragging { " dragging" } else { "" }
            )
        }
        _ => format!(
            "{} {} {}/{} {}",
            s.accent.apply_to("gallery"),
            s.value.apply_to(&point.label),
            state.active_image_index + 1,
            point.images.len(),
            s.link.apply_to(nav.current_image())
        ),
    };

    println!(
        "  {:>3} {:<24}{}",
        s.label.apply_to(step),
        event.to_string(),
        view
    );
}
