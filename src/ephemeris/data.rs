//! Keplerian elements of the major planets (J2000 epoch, mean ecliptic and equinox).
//! Source: JPL "Approximate Positions of the Planets", Table 2b (valid 3000 BC to 3000 AD),
//! including the extra mean anomaly terms for Jupiter through Neptune.

use super::{MeanAnomalyCorrection, OrbitalElements};

/// Identifier for the planets drawn in the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlanetId {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl PlanetId {
    /// All planets, innermost first (this is also the draw order)
    pub const ALL: &'static [PlanetId] = &[
        PlanetId::Mercury,
        PlanetId::Venus,
        PlanetId::Earth,
        PlanetId::Mars,
        PlanetId::Jupiter,
        PlanetId::Saturn,
        PlanetId::Uranus,
        PlanetId::Neptune,
    ];

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            PlanetId::Mercury => "Mercury",
            PlanetId::Venus => "Venus",
            PlanetId::Earth => "Earth",
            PlanetId::Mars => "Mars",
            PlanetId::Jupiter => "Jupiter",
            PlanetId::Saturn => "Saturn",
            PlanetId::Uranus => "Uranus",
            PlanetId::Neptune => "Neptune",
        }
    }

    /// Elements for this planet from the static table.
    pub fn elements(&self) -> &'static OrbitalElements {
        &ELEMENT_TABLE[*self as usize].elements
    }
}

/// One row of the element table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanetData {
    pub id: PlanetId,
    pub elements: OrbitalElements,
}

/// Build elements from `[a, e, I, L, ϖ, Ω]` at epoch and their rates per century.
const fn elements(at_epoch: [f64; 6], per_century: [f64; 6]) -> OrbitalElements {
    OrbitalElements {
        semi_major_axis: at_epoch[0],
        semi_major_axis_rate: per_century[0],
        eccentricity: at_epoch[1],
        eccentricity_rate: per_century[1],
        inclination: at_epoch[2],
        inclination_rate: per_century[2],
        mean_longitude: at_epoch[3],
        mean_longitude_rate: per_century[3],
        long_perihelion: at_epoch[4],
        long_perihelion_rate: per_century[4],
        long_node: at_epoch[5],
        long_node_rate: per_century[5],
        correction: MeanAnomalyCorrection::NONE,
    }
}

/// Outer-planet mean anomaly terms `b, c, s, f` (degrees).
const fn corrected(mut el: OrbitalElements, b: f64, c: f64, s: f64, f: f64) -> OrbitalElements {
    el.correction = MeanAnomalyCorrection { b, c, s, f };
    el
}

/// Element table in draw order, Mercury to Neptune.
///
/// Earth's row is the Earth-Moon barycenter.
pub static ELEMENT_TABLE: [PlanetData; 8] = [
    PlanetData {
        id: PlanetId::Mercury,
        elements: elements(
            [0.38709843, 0.20563661, 7.00559432, 252.25166724, 77.45771895, 48.33961819],
            [0.00000000, 0.00002123, -0.00590158, 149472.67486623, 0.15940013, -0.12214182],
        ),
    },
    PlanetData {
        id: PlanetId::Venus,
        elements: elements(
            [0.72332102, 0.00676399, 3.39777545, 181.97970850, 131.76755713, 76.67261496],
            [-0.00000026, -0.00005107, 0.00043494, 58517.81560260, 0.05679648, -0.27274174],
        ),
    },
    PlanetData {
        id: PlanetId::Earth,
        elements: elements(
            [1.00000018, 0.01673163, -0.00054346, 100.46691572, 102.93005885, -5.11260389],
            [-0.00000003, -0.00003661, -0.01337178, 35999.37306329, 0.31795260, -0.24123856],
        ),
    },
    PlanetData {
        id: PlanetId::Mars,
        elements: elements(
            [1.52371243, 0.09336511, 1.85181869, -4.56813164, -23.91744784, 49.71320984],
            [0.00000097, 0.00009149, -0.00724757, 19140.29934243, 0.45223625, -0.26852431],
        ),
    },
    PlanetData {
        id: PlanetId::Jupiter,
        elements: corrected(
            elements(
                [5.20248019, 0.04853590, 1.29861416, 34.33479152, 14.27495244, 100.29282654],
                [-0.00002864, 0.00018026, -0.00322699, 3034.90371757, 0.18199196, 0.13024619],
            ),
            -0.00012452,
            0.06064060,
            -0.35635438,
            38.35125000,
        ),
    },
    PlanetData {
        id: PlanetId::Saturn,
        elements: corrected(
            elements(
                [9.54149883, 0.05550825, 2.49424102, 50.07571329, 92.86136063, 113.63998702],
                [-0.00003065, -0.00032044, 0.00451969, 1222.11494724, 0.54179478, -0.25015002],
            ),
            0.00025899,
            -0.13434469,
            0.87320147,
            38.35125000,
        ),
    },
    PlanetData {
        id: PlanetId::Uranus,
        elements: corrected(
            elements(
                [19.18797948, 0.04685740, 0.77298127, 314.20276625, 172.43404441, 73.96250215],
                [-0.00020455, -0.00001550, -0.00180155, 428.49512595, 0.09266985, 0.05739699],
            ),
            0.00058331,
            -0.97731848,
            0.17689245,
            7.67025000,
        ),
    },
    PlanetData {
        id: PlanetId::Neptune,
        elements: corrected(
            elements(
                [30.06952752, 0.00895439, 1.77005520, 304.22289287, 46.68158724, 131.78635853],
                [0.00006447, 0.00000818, 0.00022400, 218.46515314, 0.01009938, -0.00606302],
            ),
            -0.00041348,
            0.68346318,
            -0.10162547,
            7.67025000,
        ),
    },
];
