// MIT/Apache2 License

//! Fixed-point angles and table-based trigonometry.
//!
//! A full turn is [`TRIG_MAX_ANGLE`] units. Sines and cosines are scaled so that `1.0` is [`TRIG_MAX_RATIO`].
//! Since device space has Y pointing down, positive angles turn clockwise on screen.

#![allow(clippy::unreadable_literal)]

use std::ops;

/// The number of angle units in one full turn.
pub const TRIG_MAX_ANGLE: i32 = 0x10000;
/// The value that [`sin_lookup`] and [`cos_lookup`] return for `1.0`.
pub const TRIG_MAX_RATIO: i32 = 0xFFFF;

const QUARTER: i32 = TRIG_MAX_ANGLE / 4;

// table steps are 64 angle units (or 1/256 of a unit ratio) wide
const STEP_SHIFT: u32 = 6;
const STEP_MASK: i32 = (1 << STEP_SHIFT) - 1;

/// `sin(i / 256 * 90deg) * TRIG_MAX_RATIO` for `i` in `0..=256`.
static SINE_TABLE: [i32; 257] = [
    0, 402, 804, 1206, 1608, 2010, 2412, 2814, 3216, 3617,
    4019, 4420, 4821, 5222, 5623, 6023, 6424, 6824, 7223, 7623,
    8022, 8421, 8820, 9218, 9616, 10014, 10411, 10808, 11204, 11600,
    11996, 12391, 12785, 13179, 13573, 13966, 14359, 14751, 15142, 15533,
    15924, 16313, 16703, 17091, 17479, 17866, 18253, 18639, 19024, 19408,
    19792, 20175, 20557, 20939, 21319, 21699, 22078, 22456, 22834, 23210,
    23586, 23960, 24334, 24707, 25079, 25450, 25820, 26189, 26557, 26925,
    27291, 27656, 28020, 28383, 28745, 29106, 29465, 29824, 30181, 30538,
    30893, 31247, 31600, 31952, 32302, 32651, 32999, 33346, 33692, 34036,
    34379, 34721, 35061, 35400, 35738, 36074, 36409, 36743, 37075, 37406,
    37736, 38064, 38390, 38715, 39039, 39361, 39682, 40001, 40319, 40635,
    40950, 41263, 41575, 41885, 42194, 42500, 42806, 43109, 43411, 43712,
    44011, 44308, 44603, 44897, 45189, 45479, 45768, 46055, 46340, 46624,
    46905, 47185, 47464, 47740, 48014, 48287, 48558, 48827, 49095, 49360,
    49624, 49885, 50145, 50403, 50659, 50913, 51166, 51416, 51664, 51911,
    52155, 52398, 52638, 52877, 53113, 53348, 53580, 53811, 54039, 54266,
    54490, 54713, 54933, 55151, 55367, 55582, 55794, 56003, 56211, 56417,
    56620, 56822, 57021, 57218, 57413, 57606, 57797, 57985, 58171, 58356,
    58537, 58717, 58895, 59070, 59243, 59414, 59582, 59749, 59913, 60075,
    60234, 60391, 60546, 60699, 60850, 60998, 61144, 61287, 61429, 61567,
    61704, 61838, 61970, 62100, 62227, 62352, 62475, 62595, 62713, 62829,
    62942, 63053, 63161, 63267, 63371, 63472, 63571, 63668, 63762, 63853,
    63943, 64030, 64114, 64196, 64276, 64353, 64428, 64500, 64570, 64638,
    64703, 64765, 64826, 64883, 64939, 64992, 65042, 65090, 65136, 65179,
    65219, 65258, 65293, 65327, 65357, 65386, 65412, 65435, 65456, 65475,
    65491, 65504, 65515, 65524, 65530, 65534, 65535,
];

/// `atan(i / 256)` in angle units for `i` in `0..=256`.
static ARCTAN_TABLE: [i32; 257] = [
    0, 41, 81, 122, 163, 204, 244, 285, 326, 367,
    407, 448, 489, 529, 570, 610, 651, 692, 732, 773,
    813, 854, 894, 935, 975, 1015, 1056, 1096, 1136, 1177,
    1217, 1257, 1297, 1337, 1377, 1417, 1457, 1497, 1537, 1577,
    1617, 1656, 1696, 1736, 1775, 1815, 1854, 1894, 1933, 1973,
    2012, 2051, 2090, 2129, 2168, 2207, 2246, 2285, 2324, 2363,
    2401, 2440, 2478, 2517, 2555, 2594, 2632, 2670, 2708, 2746,
    2784, 2822, 2860, 2897, 2935, 2973, 3010, 3047, 3085, 3122,
    3159, 3196, 3233, 3270, 3307, 3344, 3380, 3417, 3453, 3490,
    3526, 3562, 3599, 3635, 3670, 3706, 3742, 3778, 3813, 3849,
    3884, 3920, 3955, 3990, 4025, 4060, 4095, 4129, 4164, 4199,
    4233, 4267, 4302, 4336, 4370, 4404, 4438, 4471, 4505, 4539,
    4572, 4605, 4639, 4672, 4705, 4738, 4771, 4803, 4836, 4869,
    4901, 4933, 4966, 4998, 5030, 5062, 5094, 5125, 5157, 5188,
    5220, 5251, 5282, 5313, 5344, 5375, 5406, 5437, 5467, 5498,
    5528, 5559, 5589, 5619, 5649, 5679, 5708, 5738, 5768, 5797,
    5826, 5856, 5885, 5914, 5943, 5972, 6000, 6029, 6058, 6086,
    6114, 6142, 6171, 6199, 6227, 6254, 6282, 6310, 6337, 6365,
    6392, 6419, 6446, 6473, 6500, 6527, 6554, 6580, 6607, 6633,
    6660, 6686, 6712, 6738, 6764, 6790, 6815, 6841, 6867, 6892,
    6917, 6943, 6968, 6993, 7018, 7043, 7068, 7092, 7117, 7141,
    7166, 7190, 7214, 7238, 7262, 7286, 7310, 7334, 7358, 7381,
    7405, 7428, 7451, 7475, 7498, 7521, 7544, 7566, 7589, 7612,
    7635, 7657, 7679, 7702, 7724, 7746, 7768, 7790, 7812, 7834,
    7856, 7877, 7899, 7920, 7942, 7963, 7984, 8005, 8026, 8047,
    8068, 8089, 8110, 8131, 8151, 8172, 8192,
];

/// An angle, measured in fixed-point units where [`TRIG_MAX_ANGLE`] is one full turn.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Angle(pub i32);

impl Angle {
    pub const ZERO: Angle = Angle(0);
    pub const QUARTER_TURN: Angle = Angle(QUARTER);
    pub const HALF_TURN: Angle = Angle(TRIG_MAX_ANGLE / 2);
    pub const FULL_TURN: Angle = Angle(TRIG_MAX_ANGLE);

    /// Create an angle from a number of degrees.
    #[inline]
    #[must_use]
    pub fn from_degrees(degrees: i32) -> Angle {
        Angle((i64::from(TRIG_MAX_ANGLE) * i64::from(degrees) / 360) as i32)
    }

    /// Get the raw number of angle units.
    #[inline]
    #[must_use]
    pub fn units(self) -> i32 {
        self.0
    }

    /// Get this angle in whole degrees, rounded towards zero.
    #[inline]
    #[must_use]
    pub fn degrees(self) -> i32 {
        (i64::from(self.0) * 360 / i64::from(TRIG_MAX_ANGLE)) as i32
    }

    /// Wrap this angle into `[0, TRIG_MAX_ANGLE)`.
    #[inline]
    #[must_use]
    pub fn normalized(self) -> Angle {
        Angle(self.0.rem_euclid(TRIG_MAX_ANGLE))
    }

    /// The absolute difference between two angles, taking the shorter way around the circle.
    #[inline]
    #[must_use]
    pub fn deviation(self, other: Angle) -> Angle {
        let diff = (self.0 - other.0).rem_euclid(TRIG_MAX_ANGLE);
        if diff > TRIG_MAX_ANGLE / 2 {
            Angle(TRIG_MAX_ANGLE - diff)
        } else {
            Angle(diff)
        }
    }
}

impl ops::Add for Angle {
    type Output = Angle;

    #[inline]
    fn add(self, other: Angle) -> Angle {
        Angle(self.0.wrapping_add(other.0))
    }
}

impl ops::Sub for Angle {
    type Output = Angle;

    #[inline]
    fn sub(self, other: Angle) -> Angle {
        Angle(self.0.wrapping_sub(other.0))
    }
}

impl ops::Neg for Angle {
    type Output = Angle;

    #[inline]
    fn neg(self) -> Angle {
        Angle(self.0.wrapping_neg())
    }
}

/// Look up a value in a 257-entry table, interpolating linearly between entries. `index` is in `0..=256 << 6`.
#[inline]
fn interpolate(table: &[i32; 257], index: i32) -> i32 {
    let slot = (index >> STEP_SHIFT) as usize;
    let frac = index & STEP_MASK;
    if frac == 0 {
        table[slot]
    } else {
        let (lo, hi) = (table[slot], table[slot + 1]);
        lo + (((hi - lo) * frac) >> STEP_SHIFT)
    }
}

/// The sine of an angle, scaled by [`TRIG_MAX_RATIO`].
#[inline]
#[must_use]
pub fn sin_lookup(angle: Angle) -> i32 {
    let angle = angle.normalized().0;
    let within = angle % QUARTER;
    match angle / QUARTER {
        0 => interpolate(&SINE_TABLE, within),
        1 => interpolate(&SINE_TABLE, QUARTER - within),
        2 => -interpolate(&SINE_TABLE, within),
        _ => -interpolate(&SINE_TABLE, QUARTER - within),
    }
}

/// The cosine of an angle, scaled by [`TRIG_MAX_RATIO`].
#[inline]
#[must_use]
pub fn cos_lookup(angle: Angle) -> i32 {
    sin_lookup(angle + Angle::QUARTER_TURN)
}

/// The direction of the vector `(x, y)`, as an angle in `[0, TRIG_MAX_ANGLE)`. The zero vector has direction zero.
#[must_use]
pub fn atan2_lookup(y: i32, x: i32) -> Angle {
    let (ax, ay) = (i64::from(x).abs(), i64::from(y).abs());
    if ax == 0 && ay == 0 {
        return Angle::ZERO;
    }

    // reduce to the first octant, where the tangent is in [0, 1]
    let octant = if ay <= ax {
        interpolate(&ARCTAN_TABLE, ((ay << 14) / ax) as i32)
    } else {
        QUARTER - interpolate(&ARCTAN_TABLE, ((ax << 14) / ay) as i32)
    };
    debug_assert!(octant >= 0 && octant <= QUARTER);

    let angle = match (x >= 0, y >= 0) {
        (true, true) => octant,
        (false, true) => TRIG_MAX_ANGLE / 2 - octant,
        (false, false) => TRIG_MAX_ANGLE / 2 + octant,
        (true, false) => TRIG_MAX_ANGLE - octant,
    };
    Angle(angle).normalized()
}
