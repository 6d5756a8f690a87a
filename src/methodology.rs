//! 계산 방법론 문서(HTML/텍스트).

use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

use crate::about::{AUTHOR, EMAIL};
use crate::slip::NO_SLIP_THRESHOLD;

#[derive(Debug, Error)]
pub enum MethodologyError {
    #[error("방법론 문서 쓰기 오류: {0}")]
    Io(#[from] std::io::Error),
}

const HTML_HEAD: &str = r#"<html>
<head>
    <meta charset="UTF-8">
    <title>Methodology: Slip vs. No-Slip with Sliding Effect</title>
    <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
    <script id="MathJax-script" async
        src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js">
    </script>
    <style>
        body {
            font-family: 'Segoe UI', Arial, sans-serif;
            color: #212121;
            line-height: 1.6;
            background-color: #f5f8fa;
            max-width: 900px;
            margin: 0 auto;
            padding: 30px;
        }
        h1, h2 { font-weight: normal; color: #1976d2; }
        h1 { border-bottom: 2px solid #1976d2; padding-bottom: 10px; }
        h2 { margin-top: 30px; }
        .equation {
            margin: 1.5em 0;
            background-color: #ffffff;
            padding: 15px;
            border-radius: 8px;
            box-shadow: 0 1px 3px rgba(0,0,0,0.12);
        }
        .ref {
            margin-top: 40px;
            font-size: 0.95em;
            border-top: 1px solid #bdbdbd;
            padding-top: 20px;
        }
        footer {
            margin-top: 50px;
            font-size: 0.85em;
            color: #757575;
            text-align: center;
            padding-top: 20px;
            border-top: 1px solid #e0e0e0;
        }
        ul { padding-left: 25px; }
        li { margin-bottom: 8px; }
    </style>
</head>
"#;

const HTML_BODY: &str = r#"<body>
    <h1>Methodology: Slip vs. No-Slip with Sliding Effect</h1>

    <h2>1. Input Parameters and Definitions</h2>
    <ul>
        <li><strong>h</strong>: Gap height (m). Default is 100 nm (1e-7 m).</li>
        <li><strong>U</strong>: Sliding speed (m/s). Default is 1 m/s.</li>
        <li><strong>&mu;</strong>: Water viscosity (Pa·s). Default is 1e-3 Pa·s.</li>
        <li><strong>&lambda;</strong>: Interfacial friction coefficient (Pa·s/m). Default is 1e7 Pa·s/m.</li>
        <li><strong>&gamma;<sub>c</sub></strong>: Critical shear rate (1/s) at which slip increases. Default is 1e7 1/s.</li>
        <li><strong>m</strong>: Exponent controlling slip sensitivity to shear. Default is 2.</li>
    </ul>

    <h2>2. Fundamental Equations</h2>
    <div class="equation">
        <p><strong>Shear Rate:</strong></p>
        $$ \gamma = \frac{U}{h} $$
    </div>
    <div class="equation">
        <p><strong>Shear Stress:</strong></p>
        $$ \tau = \mu \cdot \gamma $$
    </div>
    <div class="equation">
        <p><strong>Baseline Slip Length:</strong></p>
        $$ b_0 = \frac{\mu}{\lambda} $$
    </div>
    <div class="equation">
        <p><strong>Effective Slip Length:</strong></p>
        $$ b_{\text{eff}} = b_0 \left[ 1 + \left|\frac{\gamma}{\gamma_c}\right|^m \right] $$
    </div>

    <h2>3. Decision Criterion</h2>
    <div class="equation">
        <p>Slip Ratio:</p>
        $$ \text{Slip Ratio} = \frac{b_{\text{eff}}}{h} $$
    </div>
    <p>
        If $$ \frac{b_{\text{eff}}}{h} < {threshold} $$, then assume <strong>No-Slip</strong>.<br>
        If $$ \frac{b_{\text{eff}}}{h} \geq {threshold} $$, then slip is significant and a <strong>Slip</strong> condition should be used.
    </p>

    <h2>4. Rationale</h2>
    <p>
        At low shear rates, \( b_{\text{eff}} \) approximates \( b_0 \). At higher shear rates, the additional sliding effect increases the effective slip length,
        capturing the shear-dependent behavior observed in experiments.
    </p>
    <p>
        The computed shear rate and shear stress provide insight into the flow conditions, indicating that high shear may amplify slip effects.
        A negative sliding speed only reverses the direction of shear; the slip length depends on its magnitude.
    </p>

    <div class="ref">
        <h2>References</h2>
        <p>Thompson, P. A., and S. M. Troian. "A General Boundary Condition for Liquid Flow at Solid Surfaces." <em>Nature</em>, vol. 389, no. 6649, 1997, pp. 360–362.</p>
        <p>Neto, C., D. R. Evans, E. Bonaccurso, H.-J. Butt, and V. S. J. Craig. "Fluid Slip in Diverse Regimes: A Review of Experimental Studies." <em>Reports on Progress in Physics</em>, vol. 68, no. 12, 2005, pp. 2859–2897.</p>
        <p>Bocquet, Lydéric, and Jean-Louis Barrat. "Hydrodynamic Boundary Conditions, Correlation between Friction and Slip at a Fluid/Solid Interface." <em>Soft Matter</em>, vol. 3, no. 4, 2007, pp. 685–693.</p>
    </div>
"#;

/// 방법론 HTML 문서를 만든다.
pub fn methodology_html(year: i32) -> String {
    let body = HTML_BODY.replace("{threshold}", &NO_SLIP_THRESHOLD.to_string());
    format!(
        "{HTML_HEAD}{body}\n    <footer>\n        &copy; {year} {AUTHOR} ({EMAIL}) - MIT License\n    </footer>\n</body>\n</html>\n"
    )
}

/// 입력 폼 옆에 표시하는 판정 기준 요약.
pub fn criteria_summary() -> String {
    format!(
        "• Baseline slip length: b₀ = μ / λ\n\
         • Effective slip length: bₑff = b₀ [1 + |γ / γc|^m]\n\
         • If bₑff/h < {t}: No-Slip condition\n\
         • If bₑff/h ≥ {t}: Slip condition recommended",
        t = NO_SLIP_THRESHOLD
    )
}

/// 터미널/앱 내 창에서 보여 줄 텍스트 버전.
pub fn methodology_text() -> String {
    format!(
        "Methodology: Slip vs. No-Slip with Sliding Effect\n\n\
         Inputs: h gap height [nm], U sliding speed [m/s], μ viscosity [Pa·s],\n\
         λ interfacial friction [Pa·s/m], γc critical shear rate [1/s], m exponent.\n\n\
         Shear rate:             γ = U / h\n\
         Shear stress:           τ = μ · γ\n\
         Baseline slip length:   b₀ = μ / λ\n\
         Effective slip length:  bₑff = b₀ [1 + |γ / γc|^m]\n\
         Slip ratio:             bₑff / h\n\n\
         {}\n\n\
         References: Thompson & Troian, Nature 389 (1997); Neto et al., Rep. Prog. Phys. 68 (2005);\n\
         Bocquet & Barrat, Soft Matter 3 (2007).",
        criteria_summary()
    )
}

/// HTML 문서를 임시 파일(삭제되지 않음)로 기록하고 경로를 돌려준다.
pub fn write_methodology_html(year: i32) -> Result<PathBuf, MethodologyError> {
    let mut file = tempfile::Builder::new()
        .prefix("slip_methodology_")
        .suffix(".html")
        .tempfile()?;
    file.write_all(methodology_html(year).as_bytes())?;
    let (_, path) = file.keep().map_err(std::io::Error::from)?;
    tracing::info!(path = %path.display(), "방법론 문서 생성");
    Ok(path)
}
