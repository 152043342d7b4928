use crate::core::config::HairDescription;
use crate::core::error::Result;
use crate::core::pbrt::*;

use std::sync::Arc;

/// Lobes R, TT, TRT plus one merged tail for everything after.
pub const P_MAX: usize = 3;
const SQRT_PI_OVER8: Float = 0.626657069;
// Cuticle scale tilt.
const ALPHA_DEGREES: Float = 2.0;
/// Floor on `|cos theta_i|` when `f` divides the lobe sum by it; keeps `f`
/// finite for incident directions grazing the cross-section plane.
pub const MIN_ABS_COS_THETA_I: Float = 1e-4;

// Hair Local Declarations
#[inline]
fn mp(
    cos_theta_i: Float,
    cos_theta_o: Float,
    sin_theta_i: Float,
    sin_theta_o: Float,
    v: Float,
) -> Float {
    debug_assert!(v.is_finite() && v > 0.0);
    let a = cos_theta_i * cos_theta_o / v;
    let b = sin_theta_i * sin_theta_o / v;
    let mp = if v <= 0.1 {
        Float::exp(log_i0(a) - b - 1.0 / v + LN_2 + Float::ln(1.0 / (2.0 * v)))
    } else {
        Float::exp(-b) * i0(a) / (Float::sinh(1.0 / v) * 2.0 * v)
    };
    if !mp.is_finite() {
        return 0.0;
    }
    return mp.max(0.0);
}

/// Longitudinal scattering function, exposed for symmetry checks.
pub fn longitudinal_scattering(sin_theta_i: Float, sin_theta_o: Float, v: Float) -> Float {
    let cos_theta_i = safe_sqrt(1.0 - sqr(sin_theta_i));
    let cos_theta_o = safe_sqrt(1.0 - sqr(sin_theta_o));
    return mp(cos_theta_i, cos_theta_o, sin_theta_i, sin_theta_o, v);
}

#[inline]
fn ap(cos_theta_o: Float, eta: Float, h: Float, t: &Spectrum) -> [Spectrum; P_MAX + 1] {
    let mut ap = [Spectrum::zero(); P_MAX + 1];
    // p = 0: reflection at the cuticle
    let cos_gamma_o = safe_sqrt(1.0 - h * h);
    let f = fr_dielectric(cos_theta_o * cos_gamma_o, 1.0, eta);
    ap[0] = Spectrum::from(f);
    // p = 1: two transmissions through the interface
    ap[1] = *t * sqr(1.0 - f);
    let tf = *t * f;
    for p in 2..P_MAX {
        ap[p] = ap[p - 1] * tf;
    }
    // Geometric series of every remaining bounce.
    ap[P_MAX] = (ap[P_MAX - 1] * tf).safe_div(&(Spectrum::one() - tf));
    return ap;
}

#[inline]
fn phi(p: usize, gamma_o: Float, gamma_t: Float) -> Float {
    let p = p as Float;
    return 2.0 * p * gamma_t - 2.0 * gamma_o + p * PI;
}

#[inline]
fn np(phi_: Float, p: usize, s: Float, gamma_o: Float, gamma_t: Float) -> Float {
    let dphi = remap_angle(phi_ - phi(p, gamma_o, gamma_t));
    return trimmed_logistic(dphi, s, -PI, PI).max(0.0);
}

// Everything keyed on the outgoing direction alone.
struct Outgoing {
    sin_theta_o: Float,
    cos_theta_o: Float,
    phi_o: Float,
    h: Float,
    gamma_o: Float,
    gamma_t: Float,
    ap: [Spectrum; P_MAX + 1],
}

/// Marschner-style fiber scattering with the d'Eon longitudinal term and a
/// trimmed logistic azimuthal term.
///
/// Local frame: `x` runs along the fiber, so `wo.x` is `sin(theta_o)`; the
/// azimuth is `atan2(y, z)` and the cross-section offset follows from the
/// outgoing direction as `h = sin(gamma_o) = y / cos(theta_o)`.
pub struct HairBSDF {
    eta: Float,
    eta2: Float,
    sigma_a: Spectrum,
    beta_m: Float,
    beta_n: Float,
    weight: Spectrum,
    double_sided: bool,
    v: [Float; P_MAX + 1],
    s: Float,
    sin2k_alpha: [Float; 3],
    cos2k_alpha: [Float; 3],
}

// HairBSDF Method Definitions
impl HairBSDF {
    pub fn new(sigma_a: &Spectrum, beta_m: Float, beta_n: Float, eta: Float) -> Self {
        assert!(eta > 1.0, "eta must be greater than 1: {}", eta);
        assert!(beta_m > 0.0 && beta_m <= 1.0, "beta_m out of (0, 1]: {}", beta_m);
        assert!(beta_n > 0.0 && beta_n <= 1.0, "beta_n out of (0, 1]: {}", beta_n);
        assert!(sigma_a.is_valid(), "invalid sigma_a: {:?}", sigma_a);

        let mut v = [0.0; P_MAX + 1];
        let v0 = sqr(0.726 * beta_m + 0.812 * sqr(beta_m) + 3.7 * Float::powf(beta_m, 20.0));
        assert!(v0.is_finite() && v0 > 0.0);
        v[0] = v0;
        v[1] = 0.25 * v0;
        v[2] = 4.0 * v0;
        for i in 3..v.len() {
            v[i] = v[2];
        }

        let s = SQRT_PI_OVER8
            * (0.265 * beta_n + 1.194 * sqr(beta_n) + 5.372 * Float::powf(beta_n, 22.0));

        // sin/cos of alpha, 2 alpha, 4 alpha
        let sin0 = Float::sin(radians(ALPHA_DEGREES));
        let cos0 = safe_sqrt(1.0 - sqr(sin0));
        let mut sin2k_alpha = [sin0, 0.0, 0.0];
        let mut cos2k_alpha = [cos0, 0.0, 0.0];
        for i in 1..3 {
            sin2k_alpha[i] = 2.0 * cos2k_alpha[i - 1] * sin2k_alpha[i - 1];
            cos2k_alpha[i] = sqr(cos2k_alpha[i - 1]) - sqr(sin2k_alpha[i - 1]);
        }

        HairBSDF {
            eta,
            eta2: eta * eta,
            sigma_a: *sigma_a,
            beta_m,
            beta_n,
            weight: Spectrum::one(),
            double_sided: false,
            v,
            s,
            sin2k_alpha,
            cos2k_alpha,
        }
    }

    /// Scale applied by the aggregate entry that holds this model.
    pub fn with_weight(mut self, weight: &Spectrum) -> Self {
        self.weight = *weight;
        return self;
    }

    /// Mirror directions on the back side (`wo.z < 0`) onto the front.
    pub fn with_double_sided(mut self, double_sided: bool) -> Self {
        self.double_sided = double_sided;
        return self;
    }

    pub fn weight(&self) -> Spectrum {
        return self.weight;
    }

    pub fn eta(&self) -> Float {
        return self.eta;
    }

    pub fn sigma_a(&self) -> Spectrum {
        return self.sigma_a;
    }

    pub fn is_double_sided(&self) -> bool {
        return self.double_sided;
    }

    /// Absorption of a mix of the two melanin pigments.
    pub fn sigma_a_from_concentration(ce: Float, cp: Float) -> Spectrum {
        let eumelanin_sigma_a = [0.419, 0.697, 1.37];
        let pheomelanin_sigma_a = [0.187, 0.4, 1.05];
        let mut sigma_a = Spectrum::zero();
        for i in 0..3 {
            sigma_a[i] = ce * eumelanin_sigma_a[i] + cp * pheomelanin_sigma_a[i];
        }
        return sigma_a;
    }

    /// Absorption that yields roughly the given multiple-scattered color.
    pub fn sigma_a_from_reflectance(c: &Spectrum, beta_n: Float) -> Spectrum {
        let d = 5.969 - 0.215 * beta_n + 2.532 * sqr(beta_n) - 10.73 * Float::powf(beta_n, 3.0)
            + 5.574 * Float::powf(beta_n, 4.0)
            + 0.245 * Float::powf(beta_n, 5.0);
        let mut sigma_a = Spectrum::zero();
        for i in 0..3 {
            sigma_a[i] = sqr(Float::ln(c[i]) / d);
        }
        return sigma_a;
    }

    #[inline]
    fn mirrored(&self, wo: &Vector3f) -> bool {
        return self.double_sided && wo.z < 0.0;
    }

    fn outgoing(&self, wo: &Vector3f) -> Outgoing {
        let sin_theta_o = Float::clamp(wo.x, -1.0, 1.0);
        let cos_theta_o = safe_sqrt(1.0 - sqr(sin_theta_o));
        let phi_o = Float::atan2(wo.y, wo.z);
        let h = if cos_theta_o > 0.0 {
            Float::clamp(wo.y / cos_theta_o, -1.0, 1.0)
        } else {
            0.0
        };
        let gamma_o = safe_asin(h);

        // Refracted ray
        let sin_theta_t = sin_theta_o / self.eta;
        let cos_theta_t = safe_sqrt(1.0 - sqr(sin_theta_t));
        let sin_gamma_t = if cos_theta_o > 0.0 {
            let etap = Float::sqrt(self.eta2 - sqr(sin_theta_o)) / cos_theta_o;
            h / etap
        } else {
            0.0
        };
        let cos_gamma_t = safe_sqrt(1.0 - sqr(sin_gamma_t));
        let gamma_t = safe_asin(sin_gamma_t);

        // Transmittance of one pass through the cylinder
        let t = (-self.sigma_a * (2.0 * cos_gamma_t / cos_theta_t)).exp();
        let ap = ap(cos_theta_o, self.eta, h, &t);

        return Outgoing {
            sin_theta_o,
            cos_theta_o,
            phi_o,
            h,
            gamma_o,
            gamma_t,
            ap,
        };
    }

    fn ap_pdf(ap: &[Spectrum; P_MAX + 1]) -> [Float; P_MAX + 1] {
        let mut ap_pdf = [0.0; P_MAX + 1];
        for p in 0..=P_MAX {
            ap_pdf[p] = ap[p].y().max(0.0);
        }
        let sum_y: Float = ap_pdf.iter().sum();
        if sum_y > 0.0 {
            for x in ap_pdf.iter_mut() {
                *x /= sum_y;
            }
        } else {
            ap_pdf = [1.0 / (P_MAX + 1) as Float; P_MAX + 1];
        }
        return ap_pdf;
    }

    /// Attenuation of each lobe for the outgoing direction.
    pub fn attenuation(&self, wo: &Vector3f) -> [Spectrum; P_MAX + 1] {
        let wo = if self.mirrored(wo) { mirror_z(wo) } else { *wo };
        return self.outgoing(&wo).ap;
    }

    /// Probability of picking each lobe when sampling from `wo`.
    pub fn lobe_pdf(&self, wo: &Vector3f) -> [Float; P_MAX + 1] {
        return Self::ap_pdf(&self.attenuation(wo));
    }

    // Incoming longitudinal angle seen by lobe `p` after the cuticle tilt:
    // R by +2 alpha, TT by -alpha, TRT by -4 alpha.
    fn tilt(&self, p: usize, sin_theta: Float, cos_theta: Float) -> (Float, Float) {
        let sin2k_alpha = &self.sin2k_alpha;
        let cos2k_alpha = &self.cos2k_alpha;
        return match p {
            0 => (
                sin_theta * cos2k_alpha[1] + cos_theta * sin2k_alpha[1],
                cos_theta * cos2k_alpha[1] - sin_theta * sin2k_alpha[1],
            ),
            1 => (
                sin_theta * cos2k_alpha[0] - cos_theta * sin2k_alpha[0],
                cos_theta * cos2k_alpha[0] + sin_theta * sin2k_alpha[0],
            ),
            2 => (
                sin_theta * cos2k_alpha[2] - cos_theta * sin2k_alpha[2],
                cos_theta * cos2k_alpha[2] + sin_theta * sin2k_alpha[2],
            ),
            _ => (sin_theta, cos_theta),
        };
    }

    // Inverse of `tilt`; the tail lobe is left alone.
    fn untilt(&self, p: usize, sin_theta: Float, cos_theta: Float) -> (Float, Float) {
        let sin2k_alpha = &self.sin2k_alpha;
        let cos2k_alpha = &self.cos2k_alpha;
        return match p {
            0 => (
                sin_theta * cos2k_alpha[1] - cos_theta * sin2k_alpha[1],
                cos_theta * cos2k_alpha[1] + sin_theta * sin2k_alpha[1],
            ),
            1 => (
                sin_theta * cos2k_alpha[0] + cos_theta * sin2k_alpha[0],
                cos_theta * cos2k_alpha[0] - sin_theta * sin2k_alpha[0],
            ),
            2 => (
                sin_theta * cos2k_alpha[2] + cos_theta * sin2k_alpha[2],
                cos_theta * cos2k_alpha[2] - sin_theta * sin2k_alpha[2],
            ),
            _ => (sin_theta, cos_theta),
        };
    }

    // Mp * Np for every lobe at `wi`; the tail uses a uniform azimuth.
    fn lobe_terms(&self, o: &Outgoing, wi: &Vector3f) -> [Float; P_MAX + 1] {
        let sin_theta_i = Float::clamp(wi.x, -1.0, 1.0);
        let cos_theta_i = safe_sqrt(1.0 - sqr(sin_theta_i));
        let phi_i = Float::atan2(wi.y, wi.z);
        let phi = phi_i - o.phi_o;

        let v = &self.v;
        let mut terms = [0.0; P_MAX + 1];
        for p in 0..P_MAX {
            let (sin_theta_ip, cos_theta_ip) = self.tilt(p, sin_theta_i, cos_theta_i);
            // the tilt can push the angle past the pole
            let cos_theta_ip = Float::abs(cos_theta_ip);
            terms[p] = mp(cos_theta_ip, o.cos_theta_o, sin_theta_ip, o.sin_theta_o, v[p])
                * np(phi, p, self.s, o.gamma_o, o.gamma_t);
        }
        terms[P_MAX] =
            mp(cos_theta_i, o.cos_theta_o, sin_theta_i, o.sin_theta_o, v[P_MAX]) * INV_2_PI;
        return terms;
    }

    fn eval(o: &Outgoing, terms: &[Float; P_MAX + 1], wi: &Vector3f) -> Spectrum {
        let mut fsum = Spectrum::zero();
        for p in 0..=P_MAX {
            fsum += o.ap[p] * terms[p];
        }
        // Integrators multiply by |cos| against the shading normal.
        fsum *= 1.0 / Float::max(abs_cos_theta(wi), MIN_ABS_COS_THETA_I);
        return fsum.clamp_zero();
    }

    fn density(o: &Outgoing, terms: &[Float; P_MAX + 1]) -> Float {
        let ap_pdf = Self::ap_pdf(&o.ap);
        let mut pdf = 0.0;
        for p in 0..=P_MAX {
            pdf += terms[p] * ap_pdf[p];
        }
        return pdf.max(0.0);
    }

    fn to_local_pair(&self, wo: &Vector3f, wi: &Vector3f) -> (Vector3f, Vector3f) {
        if self.mirrored(wo) {
            return (mirror_z(wo), mirror_z(wi));
        }
        return (*wo, *wi);
    }
}

#[inline]
fn mirror_z(w: &Vector3f) -> Vector3f {
    return Vector3f::new(w.x, w.y, -w.z);
}

impl BxDF for HairBSDF {
    fn f(&self, wo: &Vector3f, wi: &Vector3f) -> Spectrum {
        let (wo, wi) = self.to_local_pair(wo, wi);
        let o = self.outgoing(&wo);
        let terms = self.lobe_terms(&o, &wi);
        return Self::eval(&o, &terms, &wi);
    }

    fn sample_f(
        &self,
        wo: &Vector3f,
        sample: &BsdfSample,
    ) -> Option<(Spectrum, Vector3f, Float, BxDFType)> {
        let flip = self.mirrored(wo);
        let wo = if flip { mirror_z(wo) } else { *wo };
        let o = self.outgoing(&wo);
        let u = &sample.u;

        // Choose the lobe
        let ap_pdf = Self::ap_pdf(&o.ap);
        let mut p = P_MAX;
        let mut u0 = u[0];
        for i in 0..P_MAX {
            if u0 < ap_pdf[i] {
                p = i;
                break;
            }
            u0 -= ap_pdf[i];
        }

        // Longitudinal angle around the mirror of theta_o
        let v = self.v[p];
        let u1 = Float::max(u[1], 1e-5);
        let cos_theta = 1.0 + v * Float::ln(u1 + (1.0 - u1) * Float::exp(-2.0 / v));
        let sin_theta = safe_sqrt(1.0 - sqr(cos_theta));
        let cos_phi = Float::cos(2.0 * PI * u[2]);
        let sin_theta_s = Float::clamp(
            -cos_theta * o.sin_theta_o + sin_theta * cos_phi * o.cos_theta_o,
            -1.0,
            1.0,
        );
        let cos_theta_s = safe_sqrt(1.0 - sqr(sin_theta_s));
        // inverse of the evaluation tilt, so the density matches `pdf`
        let (sin_theta_i, _) = self.untilt(p, sin_theta_s, cos_theta_s);
        let sin_theta_i = Float::clamp(sin_theta_i, -1.0, 1.0);
        let cos_theta_i = safe_sqrt(1.0 - sqr(sin_theta_i));

        // Azimuthal offset
        let dphi = if p < P_MAX {
            phi(p, o.gamma_o, o.gamma_t) + sample_trimmed_logistic(u[3], self.s, -PI, PI)
        } else {
            2.0 * PI * u[3]
        };
        let phi_i = o.phi_o + dphi;
        let wi = Vector3f::new(
            sin_theta_i,
            cos_theta_i * Float::sin(phi_i),
            cos_theta_i * Float::cos(phi_i),
        );

        let terms = self.lobe_terms(&o, &wi);
        let pdf = Self::density(&o, &terms);
        if pdf <= 0.0 || !pdf.is_finite() {
            return None;
        }
        let f = Self::eval(&o, &terms, &wi);
        let wi = if flip { mirror_z(&wi) } else { wi };
        return Some((f, wi, pdf, self.get_type()));
    }

    fn pdf(&self, wo: &Vector3f, wi: &Vector3f) -> Float {
        let (wo, wi) = self.to_local_pair(wo, wi);
        let o = self.outgoing(&wo);
        let terms = self.lobe_terms(&o, &wi);
        return Self::density(&o, &terms);
    }

    // z is only the cross-section axis of the fiber
    fn accepts_outgoing(&self, _wo: &Vector3f) -> bool {
        return true;
    }

    fn get_type(&self) -> BxDFType {
        return BSDF_GLOSSY | BSDF_REFLECTION | BSDF_TRANSMISSION;
    }

    fn to_string(&self) -> String {
        return format!(
            "[ HairBSDF eta: {} beta_m: {} beta_n: {} v[0]: {} s: {} sigma_a: {:?} ]",
            self.eta, self.beta_m, self.beta_n, self.v[0], self.s, self.sigma_a
        );
    }
}

/// Fiber material; the model is built once and shared by every hit.
pub struct HairMaterial {
    bxdf: Arc<HairBSDF>,
}

impl HairMaterial {
    pub fn new(bxdf: HairBSDF) -> Self {
        HairMaterial {
            bxdf: Arc::new(bxdf),
        }
    }

    pub fn bxdf(&self) -> &Arc<HairBSDF> {
        return &self.bxdf;
    }
}

impl Material for HairMaterial {
    fn compute_scattering_functions(&self, si: &SurfaceInteraction) -> Result<BSDF> {
        si.check_frame()?;
        let mut b = BSDF::new(si, self.bxdf.eta());
        b.add_weighted(&self.bxdf.weight(), BxDFEnum::Hair(Arc::clone(&self.bxdf)));
        return Ok(b);
    }

    fn to_string(&self) -> String {
        return format!("[ HairMaterial {} ]", self.bxdf.to_string());
    }
}

fn check_unit_range(name: &str, key: &str, value: Float) -> Result<()> {
    if !(value > 0.0 && value <= 1.0) {
        return Err(ScatterError::invalid_parameter(
            name,
            key,
            &format!("{} is outside (0, 1]", value),
        ));
    }
    return Ok(());
}

pub fn create_hair_material(name: &str, desc: &HairDescription) -> Result<Arc<dyn Material>> {
    let sigma_a = desc.sigma_a.map(|s| s.to_spectrum());
    let color = desc.color.map(|c| c.to_spectrum());
    let eumelanin = desc.eumelanin;
    let pheomelanin = desc.pheomelanin;

    if !(desc.eta > 1.0) || !desc.eta.is_finite() {
        return Err(ScatterError::invalid_parameter(
            name,
            "eta",
            &format!("{} must be greater than 1", desc.eta),
        ));
    }
    check_unit_range(name, "beta_m", desc.beta_m)?;
    check_unit_range(name, "beta_n", desc.beta_n)?;

    let sig_a = if let Some(sigma_a) = sigma_a {
        if color.is_some() {
            log::warn!("Ignoring \"color\" parameter since \"sigma_a\" was provided.");
        }
        if eumelanin.is_some() {
            log::warn!("Ignoring \"eumelanin\" parameter since \"sigma_a\" was provided.");
        }
        if pheomelanin.is_some() {
            log::warn!("Ignoring \"pheomelanin\" parameter since \"sigma_a\" was provided.");
        }
        if !sigma_a.is_valid() {
            return Err(ScatterError::invalid_parameter(
                name,
                "sigma_a",
                "must be finite and non-negative",
            ));
        }
        sigma_a
    } else if let Some(color) = color {
        if eumelanin.is_some() {
            log::warn!("Ignoring \"eumelanin\" parameter since \"color\" was provided.");
        }
        if pheomelanin.is_some() {
            log::warn!("Ignoring \"pheomelanin\" parameter since \"color\" was provided.");
        }
        for i in 0..3 {
            if !(color[i] > 0.0 && color[i] <= 1.0) {
                return Err(ScatterError::invalid_parameter(
                    name,
                    "color",
                    "channels must lie in (0, 1]",
                ));
            }
        }
        HairBSDF::sigma_a_from_reflectance(&color, desc.beta_n)
    } else if eumelanin.is_some() || pheomelanin.is_some() {
        let ce = eumelanin.unwrap_or(0.0);
        let cp = pheomelanin.unwrap_or(0.0);
        if !(ce >= 0.0 && cp >= 0.0) {
            return Err(ScatterError::invalid_parameter(
                name,
                "eumelanin",
                "melanin concentrations must be non-negative",
            ));
        }
        HairBSDF::sigma_a_from_concentration(ce, cp)
    } else {
        // Neither absorption nor color nor melanin given.
        Spectrum::one()
    };

    let weight = desc.weight.to_spectrum();
    if !weight.is_valid() {
        return Err(ScatterError::invalid_parameter(
            name,
            "weight",
            "must be finite and non-negative",
        ));
    }

    let bxdf = HairBSDF::new(&sig_a, desc.beta_m, desc.beta_n, desc.eta)
        .with_weight(&weight)
        .with_double_sided(desc.double_sided);
    log::debug!("{}: {}", name, bxdf.to_string());
    return Ok(Arc::new(HairMaterial::new(bxdf)));
}
