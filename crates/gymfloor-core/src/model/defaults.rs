//! Built-in sample layout, used when no stored layouts are available.

use super::entrance::{Dimensions, Entrance};
use super::layout::Layout;
use super::zone::{Machine, Zone, ZoneType};
use crate::units::{FloorRect, ZoneRect};

pub const DEFAULT_LAYOUT_ID: &str = "default-gym";

fn machine(id: &str, name: &str, x: f64, y: f64, w: f64, h: f64) -> Machine {
    Machine::new(id, name, ZoneRect::new(x, y, w, h))
}

fn zone(
    id: &str,
    name: &str,
    kind: ZoneType,
    rect: (f64, f64, f64, f64),
    color: &str,
    icon: &str,
    machines: Vec<Machine>,
) -> Zone {
    let (x, y, w, h) = rect;
    Zone::new(id, name, kind, FloorRect::new(x, y, w, h), color)
        .with_icon(icon)
        .with_machines(machines)
}

/// "Main Location": a 780×580 room with eight sample zones.
pub fn default_layout() -> Layout {
    let treadmills = (0..4)
        .map(|i| {
            machine(
                &format!("tread-{}", i + 1),
                &format!("Treadmill {}", i + 1),
                20.0 + 40.0 * i as f64,
                20.0,
                30.0,
                60.0,
            )
        })
        .collect();

    let benches = [30.0, 100.0, 170.0]
        .iter()
        .enumerate()
        .map(|(i, &x)| machine(&format!("bench-{}", i + 1), "Bench", x, 80.0, 40.0, 80.0));
    let mut dumbbells = vec![machine("db-rack", "Main Rack", 10.0, 10.0, 230.0, 40.0)];
    dumbbells.extend(benches);

    let racks = [(20.0, 20.0), (120.0, 20.0), (20.0, 120.0), (120.0, 120.0)]
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| {
            machine(
                &format!("rack-{}", i + 1),
                &format!("Rack {}", i + 1),
                x,
                y,
                60.0,
                60.0,
            )
        })
        .collect();

    let zones = vec![
        zone(
            "zone-cardio-1",
            "Treadmills",
            ZoneType::Cardio,
            (40.0, 40.0, 200.0, 100.0),
            "#38bdf8",
            "Treadmill",
            treadmills,
        ),
        zone(
            "zone-cardio-2",
            "Rowers",
            ZoneType::Cardio,
            (40.0, 170.0, 200.0, 60.0),
            "#38bdf8",
            "Waves",
            vec![
                machine("row-1", "Rower A", 20.0, 15.0, 50.0, 30.0),
                machine("row-2", "Rower B", 90.0, 15.0, 50.0, 30.0),
                machine("row-3", "Rower C", 160.0, 15.0, 30.0, 30.0),
            ],
        ),
        zone(
            "zone-weights-1",
            "Dumbbell Rack",
            ZoneType::FreeWeights,
            (40.0, 340.0, 250.0, 200.0),
            "#fbbf24",
            "Dumbbell",
            dumbbells,
        ),
        zone(
            "zone-turf",
            "Functional Turf",
            ZoneType::Functional,
            (290.0, 40.0, 200.0, 500.0),
            "#a3e635",
            "Activity",
            Vec::new(),
        ),
        zone(
            "zone-racks",
            "Squat Racks",
            ZoneType::Rack,
            (540.0, 40.0, 200.0, 200.0),
            "#f87171",
            "Box",
            racks,
        ),
        zone(
            "zone-machines-1",
            "Cable Cross",
            ZoneType::Machine,
            (540.0, 290.0, 100.0, 100.0),
            "#c084fc",
            "Cable",
            Vec::new(),
        ),
        zone(
            "zone-machines-2",
            "Leg Press",
            ZoneType::Machine,
            (670.0, 290.0, 80.0, 100.0),
            "#c084fc",
            "Disc",
            Vec::new(),
        ),
        zone(
            "zone-bench",
            "Bench Press",
            ZoneType::FreeWeights,
            (540.0, 440.0, 200.0, 100.0),
            "#fbbf24",
            "ArrowDown",
            Vec::new(),
        ),
    ];

    Layout {
        zones,
        dimensions: Dimensions::default(),
        entrance: Entrance::default(),
        ..Layout::new(DEFAULT_LAYOUT_ID, "Main Location")
    }
}
