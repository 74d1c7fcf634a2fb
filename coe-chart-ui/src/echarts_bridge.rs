//! Typed wrappers around ECharts via `js_sys::eval()`.
//!
//! ECharts is loaded by the host page as a global (`window.echarts`). Calls
//! poll until both the library and the target container exist, so a render
//! requested right after mount still lands once the DOM settles.

use serde_json::Value;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('COE JS call failed:', e); }}",
        code
    );
    if js_sys::eval(&wrapped).is_err() {
        log::warn!("[COE] chart bridge eval failed");
    }
}

/// ECharts build injected when the host page has not loaded one.
pub const ECHARTS_SRC: &str = "https://cdn.jsdelivr.net/npm/echarts@5.5.1/dist/echarts.min.js";

/// Load ECharts once. Safe to call repeatedly.
pub fn load_echarts() {
    let src_js = Value::from(ECHARTS_SRC).to_string();
    call_js(&format!(
        r#"
        if (typeof window.echarts === 'undefined' && !window.__coeEchartsLoading) {{
            window.__coeEchartsLoading = true;
            var script = document.createElement('script');
            script.src = {src_js};
            script.onerror = function() {{ console.error('[COE] failed to load ECharts'); }};
            document.head.appendChild(script);
        }}
        "#,
    ));
}

/// Draw `option` into the element with id `container_id`.
///
/// Reuses the ECharts instance already bound to the element and replaces its
/// option wholesale (`notMerge`), so series removed from the new option do
/// not linger from the previous one.
pub fn render_option(container_id: &str, option: &Value) {
    // JSON is valid JS object-literal syntax.
    let option_js = option.to_string();
    let id_js = Value::from(container_id).to_string();
    call_js(&format!(
        r#"
        (function() {{
            var tries = 0;
            var poll = setInterval(function() {{
                var el = document.getElementById({id_js});
                if (typeof window.echarts !== 'undefined' && el) {{
                    clearInterval(poll);
                    try {{
                        var chart = window.echarts.getInstanceByDom(el) || window.echarts.init(el);
                        chart.setOption({option_js}, true);
                        if (!el.__coeResize) {{
                            el.__coeResize = function() {{ chart.resize(); }};
                            window.addEventListener('resize', el.__coeResize);
                        }}
                    }} catch(e) {{ console.error('[COE] render error:', e); }}
                }} else if (++tries > 100) {{
                    clearInterval(poll);
                    console.warn('[COE] gave up waiting for chart container', {id_js});
                }}
            }}, 50);
        }})();
        "#,
    ));
}

/// Dispose the ECharts instance bound to `container_id`, if any.
pub fn dispose_chart(container_id: &str) {
    let id_js = Value::from(container_id).to_string();
    call_js(&format!(
        r#"
        var el = document.getElementById({id_js});
        if (el && typeof window.echarts !== 'undefined') {{
            var chart = window.echarts.getInstanceByDom(el);
            if (chart) chart.dispose();
            if (el.__coeResize) {{
                window.removeEventListener('resize', el.__coeResize);
                delete el.__coeResize;
            }}
        }}
        "#,
    ));
}
