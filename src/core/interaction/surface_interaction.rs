use crate::core::error::Result;
use crate::core::pbrt::*;

#[derive(Default, Debug, Clone, Copy)]
pub struct SurfaceInteractionShading {
    pub n: Normal3f,
    pub dpdu: Vector3f,
}

/// Hit point handed to a material.
///
/// For fibers `dpdu` runs along the strand and `uv[1]` spans its width.
#[derive(Default, Clone, Debug)]
pub struct SurfaceInteraction {
    pub p: Point3f,
    pub n: Normal3f,
    pub uv: Point2f,
    pub wo: Vector3f,
    pub dpdu: Vector3f,
    pub shading: SurfaceInteractionShading,
}

impl SurfaceInteraction {
    pub fn new(p: &Point3f, uv: &Point2f, wo: &Vector3f, dpdu: &Vector3f, n: &Normal3f) -> Self {
        let n = n.normalize();
        SurfaceInteraction {
            p: *p,
            n,
            uv: *uv,
            wo: wo.normalize(),
            dpdu: *dpdu,
            shading: SurfaceInteractionShading { n, dpdu: *dpdu },
        }
    }

    /// Overrides the shading frame; the geometric normal is flipped to its side.
    pub fn set_shading_geometry(&mut self, dpdu: &Vector3f, ns: &Normal3f) {
        self.shading.n = ns.normalize();
        self.shading.dpdu = *dpdu;
        self.n = face_forward(&self.n, &self.shading.n);
    }

    /// Fails when no orthonormal shading frame can be built at this point.
    pub fn check_frame(&self) -> Result<()> {
        let ns = &self.shading.n;
        let dpdu = &self.shading.dpdu;
        if ns.has_nans() || dpdu.has_nans() || self.n.has_nans() {
            return Err(ScatterError::DegenerateFrame);
        }
        if ns.length_squared() == 0.0 || self.n.length_squared() == 0.0 {
            return Err(ScatterError::DegenerateFrame);
        }
        let t = *dpdu - *ns * Vector3f::dot(dpdu, ns);
        if t.length_squared() <= 1e-12 * Float::max(dpdu.length_squared(), 1.0) {
            return Err(ScatterError::DegenerateFrame);
        }
        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_checks() {
        let si = SurfaceInteraction::new(
            &Point3f::zero(),
            &Point2f::new(0.5, 0.5),
            &Vector3f::new(0.0, 0.0, 1.0),
            &Vector3f::new(1.0, 0.0, 0.0),
            &Normal3f::new(0.0, 0.0, 1.0),
        );
        assert!(si.check_frame().is_ok());

        let mut bad = si.clone();
        bad.shading.dpdu = Vector3f::new(0.0, 0.0, 2.0);
        assert!(matches!(bad.check_frame(), Err(ScatterError::DegenerateFrame)));

        let mut bad = si.clone();
        bad.shading.dpdu = Vector3f::zero();
        assert!(bad.check_frame().is_err());
    }
}
