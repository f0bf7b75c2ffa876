// Copyright (c) 2025 wxconvert authors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含API请求和响应的数据传输对象
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含内容提取与结构保留等核心业务服务
pub mod domain;

/// 引擎模块
///
/// 实现文章内容的抓取（网络请求与本地文件）
pub mod engines;

/// 基础设施模块
///
/// 提供外部服务集成，如微信公众号接口
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由、处理器和错误转换
pub mod presentation;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
