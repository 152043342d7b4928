use crate::core::pbrt::*;

use std::fmt::Debug;
use std::fmt::Formatter;

/// A weighted scattering model inside a [`BSDF`].
pub struct BSDFEntry {
    pub weight: Spectrum,
    pub bxdf: BxDFEnum,
}

/// Scattering at one hit point: weighted models sharing a shading frame.
///
/// Built by a material for a single evaluation and dropped afterwards.
pub struct BSDF {
    pub eta: Float,
    pub ns: Normal3f,
    pub ng: Normal3f,
    pub ss: Vector3f,
    pub ts: Vector3f,
    entries: Vec<BSDFEntry>,
}

impl Debug for BSDF {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let entries: Vec<String> = self
            .entries
            .iter()
            .map(|e| format!("{:?} x {}", e.weight, e.bxdf.to_string()))
            .collect();
        f.debug_struct("BSDF")
            .field("eta", &self.eta)
            .field("ns", &self.ns)
            .field("ng", &self.ng)
            .field("ss", &self.ss)
            .field("ts", &self.ts)
            .field("entries", &entries)
            .finish()
    }
}

#[inline]
fn debug_assert_unit(w: &Vector3f) {
    debug_assert!(
        (w.length_squared() - 1.0).abs() < 1e-3,
        "direction is not normalized: {:?}",
        w
    );
}

impl BSDF {
    /// Frame from the shading normal and `dpdu`; call
    /// [`SurfaceInteraction::check_frame`] first.
    pub fn new(si: &SurfaceInteraction, eta: Float) -> Self {
        let ns = si.shading.n.normalize();
        let ng = si.n.normalize();
        let dpdu = si.shading.dpdu;
        let ss = (dpdu - ns * Vector3f::dot(&dpdu, &ns)).normalize();
        let ts = Vector3f::cross(&ns, &ss);
        BSDF {
            eta,
            ns,
            ng,
            ss,
            ts,
            entries: Vec::new(),
        }
    }

    pub fn add(&mut self, bxdf: BxDFEnum) {
        self.add_weighted(&Spectrum::one(), bxdf);
    }

    pub fn add_weighted(&mut self, weight: &Spectrum, bxdf: BxDFEnum) {
        self.entries.push(BSDFEntry {
            weight: *weight,
            bxdf,
        });
    }

    /// Multiplies every entry weight by `s`.
    pub fn scale(&mut self, s: &Spectrum) {
        for e in self.entries.iter_mut() {
            e.weight *= *s;
        }
    }

    /// Moves the entries of `other` into this aggregate, keeping this frame.
    pub fn append(&mut self, other: BSDF) {
        self.entries.extend(other.entries);
    }

    pub fn entries(&self) -> &[BSDFEntry] {
        return &self.entries;
    }

    pub fn num_components(&self, t: BxDFType) -> usize {
        return self
            .entries
            .iter()
            .filter(|e| e.bxdf.matches_flags(t))
            .count();
    }

    pub fn world_to_local(&self, v: &Vector3f) -> Vector3f {
        let x = Vector3f::dot(v, &self.ss);
        let y = Vector3f::dot(v, &self.ts);
        let z = Vector3f::dot(v, &self.ns);
        return Vector3f::new(x, y, z);
    }

    pub fn local_to_world(&self, v: &Vector3f) -> Vector3f {
        let x = self.ss.x * v.x + self.ts.x * v.y + self.ns.x * v.z;
        let y = self.ss.y * v.x + self.ts.y * v.y + self.ns.y * v.z;
        let z = self.ss.z * v.x + self.ts.z * v.y + self.ns.z * v.z;
        return Vector3f::new(x, y, z);
    }

    /// Probability of picking each entry in `sample_f` for the world
    /// direction `wo_w`, zero for entries that do not match `flags` or have
    /// no response to `wo_w`. Proportional to the luminance of the entry
    /// weight, or uniform when every candidate weight is black.
    pub fn selection_probabilities(&self, wo_w: &Vector3f, flags: BxDFType) -> Vec<Float> {
        let wo = self.world_to_local(wo_w);
        return self.selection_local(&wo, flags);
    }

    fn selection_local(&self, wo: &Vector3f, flags: BxDFType) -> Vec<Float> {
        let candidate =
            |e: &BSDFEntry| e.bxdf.matches_flags(flags) && e.bxdf.accepts_outgoing(wo);
        let mut probs: Vec<Float> = self
            .entries
            .iter()
            .map(|e| -> Float {
                if candidate(e) {
                    Float::max(e.weight.y(), 0.0)
                } else {
                    0.0
                }
            })
            .collect();
        let total: Float = probs.iter().sum();
        if total > 0.0 {
            for p in probs.iter_mut() {
                *p /= total;
            }
        } else {
            let n = self.entries.iter().filter(|e| candidate(e)).count();
            for (p, e) in probs.iter_mut().zip(self.entries.iter()) {
                if n > 0 && candidate(e) {
                    *p = 1.0 / n as Float;
                }
            }
        }
        return probs;
    }

    // Weighted sum over entries whose reflection/transmission kind agrees
    // with the geometric side of the two world directions.
    fn f_local(
        &self,
        wo_w: &Vector3f,
        wi_w: &Vector3f,
        wo: &Vector3f,
        wi: &Vector3f,
        flags: BxDFType,
    ) -> Spectrum {
        let reflect = (Vector3f::dot(wi_w, &self.ng) * Vector3f::dot(wo_w, &self.ng)) > 0.0;
        return self
            .entries
            .iter()
            .filter(|e| -> bool {
                let tp = e.bxdf.get_type();
                let b1 = e.bxdf.matches_flags(flags) && e.bxdf.accepts_outgoing(wo);
                let b2 = reflect && ((tp & BSDF_REFLECTION) != 0);
                let b3 = !reflect && ((tp & BSDF_TRANSMISSION) != 0);
                return b1 && (b2 || b3);
            })
            .map(|e| -> Spectrum { e.weight * e.bxdf.f(wo, wi) })
            .fold(Spectrum::zero(), |a, b| a + b);
    }

    fn pdf_local(&self, probs: &[Float], wo: &Vector3f, wi: &Vector3f) -> Float {
        return self
            .entries
            .iter()
            .zip(probs.iter())
            .filter(|(_, p)| **p > 0.0)
            .map(|(e, p)| -> Float { *p * e.bxdf.pdf(wo, wi) })
            .sum::<Float>();
    }

    pub fn f(&self, wo_w: &Vector3f, wi_w: &Vector3f, flags: BxDFType) -> Spectrum {
        debug_assert_unit(wo_w);
        debug_assert_unit(wi_w);
        let wi = self.world_to_local(wi_w);
        let wo = self.world_to_local(wo_w);
        return self.f_local(wo_w, wi_w, &wo, &wi, flags);
    }

    pub fn sample_f(
        &self,
        wo_w: &Vector3f,
        sample: &BsdfSample,
        flags: BxDFType,
    ) -> Option<(Spectrum, Vector3f, Float, BxDFType)> {
        debug_assert_unit(wo_w);
        let wo = self.world_to_local(wo_w);
        let probs = self.selection_local(&wo, flags);
        let mut index = probs.iter().rposition(|p| *p > 0.0)?;
        {
            // inverse CDF; the last candidate keeps any rounding residue
            let mut u = sample.u_component;
            for (i, p) in probs.iter().enumerate() {
                if *p <= 0.0 {
                    continue;
                }
                if u < *p {
                    index = i;
                    break;
                }
                u -= *p;
            }
        }

        let entry = &self.entries[index];
        let (_, wi, _, sampled_type) = entry.bxdf.sample_f(&wo, sample)?;
        if wi.has_nans() {
            return None;
        }
        let wi_w = self.local_to_world(&wi);

        let pdf = self.pdf_local(&probs, &wo, &wi);
        if pdf <= 0.0 || !pdf.is_finite() {
            return None;
        }
        let f = self.f_local(wo_w, &wi_w, &wo, &wi, flags);
        debug_assert!(f.y().is_finite());
        return Some((f, wi_w, pdf, sampled_type));
    }

    pub fn pdf(&self, wo_w: &Vector3f, wi_w: &Vector3f, flags: BxDFType) -> Float {
        debug_assert_unit(wo_w);
        debug_assert_unit(wi_w);
        let wi = self.world_to_local(wi_w);
        let wo = self.world_to_local(wo_w);
        let probs = self.selection_local(&wo, flags);
        return self.pdf_local(&probs, &wo, &wi);
    }

    /// Hemispherical-directional reflectance of the weighted entries.
    pub fn rho(&self, wo_w: &Vector3f, samples: &[BsdfSample], flags: BxDFType) -> Spectrum {
        let wo = self.world_to_local(wo_w);
        return self
            .entries
            .iter()
            .filter(|e| e.bxdf.matches_flags(flags) && e.bxdf.accepts_outgoing(&wo))
            .map(|e| e.weight * e.bxdf.rho(&wo, samples))
            .fold(Spectrum::zero(), |a, b| a + b);
    }
}
