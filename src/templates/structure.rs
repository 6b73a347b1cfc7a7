//! Starter files of the six-layer project tree.

use crate::constants::GITKEEP;

/// A top-level layer: its segment directories and the starter files written into it.
#[derive(Debug)]
pub struct Layer {
    pub name: &'static str,
    pub segments: &'static [&'static str],
    /// Paths relative to the layer directory, paired with their content
    pub files: &'static [(&'static str, &'static str)],
}

const APP_INDEX_TSX: &str = r#"import React from 'react';
import { Providers } from './providers';

export const App = () => {
  return (
    <Providers>
      {/* Router goes here */}
    </Providers>
  );
};
"#;

const APP_PROVIDERS_TSX: &str = r#"import React, { ReactNode } from 'react';
import { QueryClient, QueryClientProvider } from '@tanstack/react-query';

const queryClient = new QueryClient({
  defaultOptions: {
    queries: {
      staleTime: 1000 * 60 * 5,
      retry: 1,
    },
  },
});

interface ProvidersProps {
  children: ReactNode;
}

export const Providers = ({ children }: ProvidersProps) => {
  return (
    <QueryClientProvider client={queryClient}>
      {children}
    </QueryClientProvider>
  );
};
"#;

const APP_GLOBAL_STYLES_TS: &str = r#"import { css } from '@emotion/react';

export const globalStyles = css`
  *,
  *::before,
  *::after {
    box-sizing: border-box;
    margin: 0;
    padding: 0;
  }

  html {
    font-size: 16px;
  }

  body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    line-height: 1.5;
    -webkit-font-smoothing: antialiased;
  }
`;
"#;

const APP_ENV_TS: &str = r#"export const env = {
  API_URL: import.meta.env.VITE_API_URL || 'http://localhost:3000',
  IS_DEV: import.meta.env.DEV,
  IS_PROD: import.meta.env.PROD,
} as const;
"#;

const SHARED_UI_INDEX_TS: &str = r#"// Shared UI components
// export { Button } from './Button';
// export { Input } from './Input';
// export { Modal } from './Modal';
"#;

const SHARED_AXIOS_CLIENT_TS: &str = r#"import axios, { AxiosError, InternalAxiosRequestConfig } from 'axios';

const BASE_URL = import.meta.env.VITE_API_URL || 'http://localhost:3000';

export const axiosInstance = axios.create({
  baseURL: BASE_URL,
  timeout: 15000,
  headers: {
    'Content-Type': 'application/json',
  },
});

axiosInstance.interceptors.request.use(
  (config: InternalAxiosRequestConfig) => {
    const token = localStorage.getItem('accessToken');
    if (token && config.headers) {
      config.headers.Authorization = `Bearer ${token}`;
    }
    return config;
  },
  (error) => Promise.reject(error)
);

axiosInstance.interceptors.response.use(
  (response) => response,
  async (error: AxiosError) => {
    return Promise.reject(error);
  }
);
"#;

const SHARED_CN_TS: &str = r#"import { clsx, type ClassValue } from 'clsx';
import { twMerge } from 'tailwind-merge';

export const cn = (...inputs: ClassValue[]) => {
  return twMerge(clsx(inputs));
};
"#;

const SHARED_FORMAT_DATE_TS: &str = r#"export const formatDate = (
  date: Date | string,
  locale: string = 'en-US',
  options?: Intl.DateTimeFormatOptions
): string => {
  const d = typeof date === 'string' ? new Date(date) : date;
  return d.toLocaleDateString(locale, options);
};

export const formatRelativeTime = (date: Date | string): string => {
  const d = typeof date === 'string' ? new Date(date) : date;
  const now = new Date();
  const diff = now.getTime() - d.getTime();

  const seconds = Math.floor(diff / 1000);
  const minutes = Math.floor(seconds / 60);
  const hours = Math.floor(minutes / 60);
  const days = Math.floor(hours / 24);

  if (days > 0) return `${days} day${days > 1 ? 's' : ''} ago`;
  if (hours > 0) return `${hours} hour${hours > 1 ? 's' : ''} ago`;
  if (minutes > 0) return `${minutes} minute${minutes > 1 ? 's' : ''} ago`;
  return 'just now';
};
"#;

const SHARED_ROUTES_TS: &str = r#"export const ROUTES = {
  HOME: '/',
  LOGIN: '/login',
  REGISTER: '/register',
  PROFILE: '/profile',
  SETTINGS: '/settings',
} as const;

export type AppRoute = (typeof ROUTES)[keyof typeof ROUTES];
"#;

const SHARED_INDEX_TS: &str = r#"export { axiosInstance } from './api/axiosClient';
export { cn } from './lib/cn';
export { formatDate, formatRelativeTime } from './lib/formatDate';
export { ROUTES } from './config/routes';
export type { AppRoute } from './config/routes';
"#;

/// Index of a feature slice. Rendered with `slice` in the context.
pub const SLICE_INDEX_TS: &str = r#"// {{slice}} public API
// export { } from './ui';
// export { } from './api';
// export type { } from './model';
"#;

/// The layers in creation order.
pub const LAYERS: [Layer; 6] = [
    Layer {
        name: "app",
        segments: &["providers", "styles", "config"],
        files: &[
            ("index.tsx", APP_INDEX_TSX),
            ("providers/index.tsx", APP_PROVIDERS_TSX),
            ("styles/global.ts", APP_GLOBAL_STYLES_TS),
            ("config/env.ts", APP_ENV_TS),
        ],
    },
    Layer { name: "pages", segments: &[], files: &[(GITKEEP, "")] },
    Layer { name: "widgets", segments: &[], files: &[(GITKEEP, "")] },
    Layer { name: "features", segments: &[], files: &[(GITKEEP, "")] },
    Layer { name: "entities", segments: &[], files: &[(GITKEEP, "")] },
    Layer {
        name: "shared",
        segments: &["ui", "api", "lib", "config"],
        files: &[
            ("ui/index.ts", SHARED_UI_INDEX_TS),
            ("api/axiosClient.ts", SHARED_AXIOS_CLIENT_TS),
            ("lib/cn.ts", SHARED_CN_TS),
            ("lib/formatDate.ts", SHARED_FORMAT_DATE_TS),
            ("config/routes.ts", SHARED_ROUTES_TS),
            ("index.ts", SHARED_INDEX_TS),
        ],
    },
];
