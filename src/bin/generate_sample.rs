use std::f64::consts::PI;

// Planar 3-link arm, dimensions echoing the original linkage rig.
const LINK_LENGTHS: [f64; 3] = [200.0, 160.0, 60.0];

// End-effector path: a circle well inside the reachable annulus.
const PATH_CENTER: [f64; 2] = [220.0, 100.0];
const PATH_RADIUS: f64 = 50.0;

// Fixed end-effector orientation (last link pointing down).
const EFFECTOR_ANGLE: f64 = -PI / 2.0;

const STEPS: usize = 300;

/// Inverse kinematics for the 3-link arm: given an end-effector target and
/// orientation, return the three joint angles (radians, elbow-down branch).
fn solve_arm(target: [f64; 2], phi: f64) -> Option<[f64; 3]> {
    let [l1, l2, l3] = LINK_LENGTHS;

    // Wrist position: back off from the target along the last link.
    let wx = target[0] - l3 * phi.cos();
    let wy = target[1] - l3 * phi.sin();

    let d2 = wx * wx + wy * wy;
    let cos_q2 = (d2 - l1 * l1 - l2 * l2) / (2.0 * l1 * l2);
    if !(-1.0..=1.0).contains(&cos_q2) {
        return None; // wrist out of reach
    }

    let q2 = cos_q2.acos();
    let q1 = wy.atan2(wx) - (l2 * q2.sin()).atan2(l1 + l2 * q2.cos());
    let q3 = phi - q1 - q2;

    Some([q1, q2, q3])
}

fn main() {
    let output_path = "arm_angles.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    let mut written = 0usize;
    for step in 0..STEPS {
        let t = 2.0 * PI * step as f64 / STEPS as f64;
        let target = [
            PATH_CENTER[0] + PATH_RADIUS * t.cos(),
            PATH_CENTER[1] + PATH_RADIUS * t.sin(),
        ];

        let angles = solve_arm(target, EFFECTOR_ANGLE)
            .unwrap_or_else(|| panic!("Step {step}: target {target:?} unreachable"));

        writer
            .write_record(angles.iter().map(|a| a.to_string()))
            .expect("Failed to write row");
        written += 1;
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {written} time steps to {output_path}");
}
