//! Static configuration and entry-point templates.
//!
//! The templates are opaque constants written verbatim; the tool performs
//! no substitution. The only dynamic behavior is what `development.js`
//! computes at its own load time (resolving `src`/`dist` relative to its
//! location).

use anyhow::{Context, Result};
use std::path::Path;

/// Babel configuration enabling the ES and JSX preset pair.
pub const BABELRC: &str = r#"{
  "presets": ["@babel/preset-env", "@babel/preset-react"]
}
"#;

/// CommonJS webpack entry: registers babel so the ES-module config in
/// `development.js` can be loaded by the webpack CLI.
pub const WEBPACK_CONFIG: &str = r"require('@babel/register')

module.exports = require('./development').default
";

/// The actual bundler configuration: development mode, `.jsx` routed
/// through babel-loader, HTML generation, and a hot-reloading dev server.
pub const DEVELOPMENT_CONFIG: &str = r"import path from 'path'
import HtmlWebpackPlugin from 'html-webpack-plugin'

const src  = path.resolve(__dirname, 'src')
const dist = path.resolve(__dirname, 'dist')

export default {
  mode: 'development',
  context: src,
  entry: src + '/index.jsx',
  output: {
    path: dist,
    filename: 'bundle.js'
  },
  module: {
    rules: [
      {
        test: /\.jsx$/,
        exclude: /node_modules/,
        loader: 'babel-loader'
      }
    ]
  },
  resolve: {
    extensions: ['.js', '.jsx']
  },
  plugins: [
    new HtmlWebpackPlugin({
      template: src + '/index.html',
      filename: 'index.html'
    })
  ],
  devServer: {
    contentBase: dist,
    port: 8000,
    hot: true,
    open: true,
  },
}
";

/// HTML shell with the mount node the entry module renders into.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>React App</title>
  </head>
  <body>
    <div id="root"></div>
  </body>
</html>
"#;

/// React entry module.
pub const INDEX_JSX: &str = r"import React from 'react'
import ReactDOM from 'react-dom'

const App = () => <h1>Hello, React!</h1>

ReactDOM.render(<App />, document.getElementById('root'))
";

/// The template set, as (relative path, content) pairs in write order.
const TEMPLATES: &[(&str, &str)] = &[
    (".babelrc", BABELRC),
    ("webpack.config.js", WEBPACK_CONFIG),
    ("development.js", DEVELOPMENT_CONFIG),
    ("src/index.html", INDEX_HTML),
    ("src/index.jsx", INDEX_JSX),
];

/// Writes all templates under `root`.
///
/// The `src` directory must already exist. A failed write aborts the
/// remaining ones; files written so far are left in place.
///
/// # Errors
///
/// Returns an error if any write fails.
pub fn write_templates(root: &Path) -> Result<()> {
    for (relative, content) in TEMPLATES {
        let path = root.join(relative);
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(())
}
